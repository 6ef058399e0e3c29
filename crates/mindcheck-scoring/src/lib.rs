//! mindcheck-scoring
//!
//! Assessment scoring and risk classification. Nothing here touches the
//! network. Answers are reduced to a total score, the total is classified
//! into a risk tier using reference thresholds, and the result is handed to
//! an [`store::AssessmentStore`] for persistence.

pub mod aggregate;
pub mod classify;
pub mod compute;
pub mod error;
pub mod history;
pub mod quick;
pub mod reference;
pub mod store;

pub use compute::{AssessmentOutcome, compute_result};
pub use error::{AssessmentError, ReferenceDataError};
pub use reference::ReferenceData;
