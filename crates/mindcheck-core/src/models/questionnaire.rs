use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// How a question is answered and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Exactly one option is chosen.
    SingleChoice,
    /// Any number of options are chosen; every chosen value counts.
    MultipleChoice,
    /// Integer rating from 1 to 5.
    #[serde(rename = "scale")]
    Scale5,
    /// Integer rating from 1 to 10.
    #[serde(rename = "scale_extended")]
    Scale10,
    /// Free text. Never scored.
    Text,
}

impl QuestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::Scale5 => "scale",
            QuestionKind::Scale10 => "scale_extended",
            QuestionKind::Text => "text",
        }
    }

    /// Inclusive bounds for scale questions, `None` for every other kind.
    pub fn scale_bounds(self) -> Option<(i32, i32)> {
        match self {
            QuestionKind::Scale5 => Some((1, 5)),
            QuestionKind::Scale10 => Some((1, 10)),
            _ => None,
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionKind::SingleChoice | QuestionKind::MultipleChoice
        )
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_choice" => Ok(QuestionKind::SingleChoice),
            "multiple_choice" => Ok(QuestionKind::MultipleChoice),
            "scale" => Ok(QuestionKind::Scale5),
            "scale_extended" => Ok(QuestionKind::Scale10),
            "text" => Ok(QuestionKind::Text),
            other => Err(CoreError::UnknownQuestionKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub id: Uuid,
    pub label: String,
    /// Points added to the total when this option is selected.
    pub value: i32,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub order: u32,
    #[serde(default = "default_required")]
    pub is_required: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

fn default_required() -> bool {
    true
}

impl Question {
    pub fn option(&self, id: Uuid) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub questions: Vec<Question>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Questionnaire {
    /// Questions in presentation order: by `order`, ties keep their
    /// position in `questions`.
    pub fn ordered_questions(&self) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self.questions.iter().collect();
        questions.sort_by_key(|q| q.order);
        questions
    }

    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_required)
    }

    pub fn required_count(&self) -> usize {
        self.required_questions().count()
    }

    pub fn question(&self, id: Uuid) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn summary(&self) -> QuestionnaireSummary {
        QuestionnaireSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            question_count: self.questions.len(),
        }
    }
}

/// Catalog entry for listing questionnaires without their questions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub question_count: usize,
}
