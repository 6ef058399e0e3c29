use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown question kind: {0}")]
    UnknownQuestionKind(String),

    #[error("unknown assessment kind: {0}")]
    UnknownAssessmentKind(String),

    #[error("unknown risk level: {0}")]
    UnknownRiskTier(String),

    #[error("invalid owner tag: {0}")]
    InvalidOwnerTag(String),
}
