use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The raw value given for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// A single-choice selection.
    Choice { option_id: Uuid },
    /// A multiple-choice selection.
    Choices { option_ids: Vec<Uuid> },
    /// A rating on a bounded scale.
    Scale { value: i32 },
    /// A free-text response.
    Text { text: String },
}

impl AnswerValue {
    /// Short name of the answer shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            AnswerValue::Choice { .. } => "choice",
            AnswerValue::Choices { .. } => "choices",
            AnswerValue::Scale { .. } => "scale",
            AnswerValue::Text { .. } => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    pub answer: AnswerValue,
}

/// The five fixed items of the quick check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuickItem {
    Mood,
    Sleep,
    Stress,
    Social,
    Energy,
}

impl QuickItem {
    pub const ALL: [QuickItem; 5] = [
        QuickItem::Mood,
        QuickItem::Sleep,
        QuickItem::Stress,
        QuickItem::Social,
        QuickItem::Energy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuickItem::Mood => "mood",
            QuickItem::Sleep => "sleep",
            QuickItem::Stress => "stress",
            QuickItem::Social => "social",
            QuickItem::Energy => "energy",
        }
    }
}

impl fmt::Display for QuickItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuickAnswer {
    pub item: QuickItem,
    pub value: i32,
}

/// Everything a submitter sent for one assessment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "answers", rename_all = "snake_case")]
#[ts(export)]
pub enum Submission {
    /// Answers to a stored questionnaire.
    Questionnaire(Vec<SubmittedAnswer>),
    /// Answers to the fixed quick check.
    Quick(Vec<QuickAnswer>),
}
