use mindcheck_core::models::answer::Submission;
use mindcheck_core::models::questionnaire::Questionnaire;
use mindcheck_core::models::record::ScoredResponse;
use mindcheck_core::models::risk::{AssessmentKind, RiskTier};

use crate::aggregate::{aggregate_questionnaire, aggregate_quick};
use crate::classify::{ScoreContext, classify};
use crate::error::AssessmentError;
use crate::quick;
use crate::reference::ReferenceData;

/// Score and tier for one submission, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentOutcome {
    pub kind: AssessmentKind,
    pub total_score: i64,
    pub risk_tier: RiskTier,
    /// Score on the scale the kind's risk bands use.
    pub band_score: i64,
    pub responses: Vec<ScoredResponse>,
}

/// Score a submission and classify it.
///
/// `questionnaire` is `None` for the quick check. The submission must have
/// the matching shape; any other combination has no classification policy.
/// Pure: identical inputs always produce identical outcomes.
pub fn compute_result(
    questionnaire: Option<&Questionnaire>,
    submission: &Submission,
    reference: &ReferenceData,
) -> Result<AssessmentOutcome, AssessmentError> {
    let (kind, aggregate, required_questions) = match (questionnaire, submission) {
        (Some(questionnaire), Submission::Questionnaire(answers)) => (
            AssessmentKind::Full,
            aggregate_questionnaire(questionnaire, answers)?,
            questionnaire.required_count(),
        ),
        (None, Submission::Quick(answers)) => (
            AssessmentKind::Quick,
            aggregate_quick(answers)?,
            quick::questions().len(),
        ),
        (Some(questionnaire), Submission::Quick(_)) => {
            return Err(AssessmentError::UnknownAssessmentKind(format!(
                "quick answers submitted for questionnaire {}",
                questionnaire.id
            )));
        }
        (None, Submission::Questionnaire(_)) => {
            return Err(AssessmentError::UnknownAssessmentKind(
                "questionnaire answers submitted without a questionnaire".to_string(),
            ));
        }
    };

    let evaluation = classify(
        aggregate.total,
        ScoreContext {
            kind,
            required_questions,
        },
        reference,
    )?;

    Ok(AssessmentOutcome {
        kind,
        total_score: aggregate.total,
        risk_tier: evaluation.tier,
        band_score: evaluation.band_score,
        responses: aggregate.responses,
    })
}
