use thiserror::Error;
use uuid::Uuid;

use mindcheck_core::models::risk::{AssessmentKind, RiskTier};

/// Validation failures raised while scoring one submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("answer {value} for '{question}' is outside the range [{min}, {max}]")]
    OutOfRangeAnswer {
        question: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("required question '{question}' was not answered")]
    MissingRequiredAnswer { question: String },

    #[error("unknown assessment kind: {0}")]
    UnknownAssessmentKind(String),

    #[error("option {option_id} does not belong to question '{question}'")]
    InvalidOptionReference { question: String, option_id: Uuid },

    #[error("question {0} is not part of this questionnaire")]
    UnknownQuestion(Uuid),

    #[error("question '{question}' expects a {expected} answer, got {found}")]
    AnswerKindMismatch {
        question: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("question '{question}' was answered more than once")]
    DuplicateAnswer { question: String },

    #[error("required question '{question}' has no options to choose from")]
    MalformedQuestionnaire { question: String },
}

/// Problems found in risk band and threshold reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceDataError {
    #[error("{kind} {tier} band has min_score {min} above max_score {max}")]
    InvertedBand {
        kind: AssessmentKind,
        tier: RiskTier,
        min: i64,
        max: i64,
    },

    #[error("{kind} bands overlap: {first} [{first_min}, {first_max}] and {second} [{second_min}, {second_max}]")]
    OverlappingBands {
        kind: AssessmentKind,
        first: RiskTier,
        first_min: i64,
        first_max: i64,
        second: RiskTier,
        second_min: i64,
        second_max: i64,
    },

    #[error("{kind} thresholds out of order: moderate {moderate} is above high {high}")]
    ThresholdsOutOfOrder {
        kind: AssessmentKind,
        moderate: i64,
        high: i64,
    },

    #[error("{kind} percentage policy needs a positive points_per_question, got {points}")]
    InvalidPointsPerQuestion { kind: AssessmentKind, points: i64 },
}
