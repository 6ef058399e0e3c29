use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use mindcheck_core::models::answer::Submission;
use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::questionnaire::Questionnaire;
use mindcheck_core::models::record::{AssessmentRecord, QUICK_ASSESSMENT_NAME};

use crate::compute::compute_result;
use crate::error::AssessmentError;
use crate::reference::ReferenceData;

/// Persistence seam for the scoring flow.
pub trait AssessmentStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a questionnaire with its questions and options.
    fn load_questionnaire(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Questionnaire, Self::Error>> + Send;

    /// Persist a completed result.
    fn store_result(
        &self,
        record: &AssessmentRecord,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmitError<E> {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("questionnaire {0} is not active")]
    InactiveQuestionnaire(Uuid),

    #[error("store error: {0}")]
    Store(#[source] E),
}

/// Load, score, classify and store one submission.
pub async fn submit<S: AssessmentStore>(
    store: &S,
    questionnaire_id: Option<Uuid>,
    submission: &Submission,
    reference: &ReferenceData,
    owner: Option<OwnerTag>,
    completed_at: jiff::Timestamp,
) -> Result<AssessmentRecord, SubmitError<S::Error>> {
    let questionnaire = match questionnaire_id {
        Some(id) => {
            let questionnaire = store
                .load_questionnaire(id)
                .await
                .map_err(SubmitError::Store)?;
            if !questionnaire.is_active {
                return Err(SubmitError::InactiveQuestionnaire(id));
            }
            Some(questionnaire)
        }
        None => None,
    };

    let outcome = compute_result(questionnaire.as_ref(), submission, reference)?;

    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        kind: outcome.kind,
        questionnaire_id: questionnaire.as_ref().map(|q| q.id),
        questionnaire_name: questionnaire
            .as_ref()
            .map(|q| q.name.clone())
            .unwrap_or_else(|| QUICK_ASSESSMENT_NAME.to_string()),
        owner,
        total_score: outcome.total_score,
        band_score: outcome.band_score,
        risk_level: outcome.risk_tier,
        completed_at,
        responses: outcome.responses,
    };

    store
        .store_result(&record)
        .await
        .map_err(SubmitError::Store)?;
    Ok(record)
}
