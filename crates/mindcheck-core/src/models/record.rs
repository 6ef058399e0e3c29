use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::QuickItem;
use super::owner::OwnerTag;
use super::risk::{AssessmentKind, RiskTier};

pub const QUICK_ASSESSMENT_NAME: &str = "Quick Assessment";

/// Which question a scored response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseTarget {
    Question(Uuid),
    Quick(QuickItem),
}

/// One answered question together with the points it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredResponse {
    pub target: ResponseTarget,
    #[serde(default)]
    pub selected_options: Vec<Uuid>,
    pub scale_value: Option<i32>,
    pub text_response: Option<String>,
    pub score: i64,
}

/// A completed assessment attempt. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub kind: AssessmentKind,
    pub questionnaire_id: Option<Uuid>,
    pub questionnaire_name: String,
    pub owner: Option<OwnerTag>,
    pub total_score: i64,
    /// Score on the scale the kind's risk bands use: the raw total for the
    /// quick check, a whole percentage for full questionnaires.
    pub band_score: i64,
    pub risk_level: RiskTier,
    pub completed_at: jiff::Timestamp,
    pub responses: Vec<ScoredResponse>,
}

impl AssessmentRecord {
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            id: self.id,
            total_score: self.total_score,
            risk_level: self.risk_level,
            completed_at: self.completed_at,
            questionnaire_name: self.questionnaire_name.clone(),
        }
    }
}

/// Compact view of a stored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultSummary {
    pub id: Uuid,
    pub total_score: i64,
    pub risk_level: RiskTier,
    pub completed_at: jiff::Timestamp,
    pub questionnaire_name: String,
}
