mod common;

use mindcheck_core::models::answer::Submission;
use mindcheck_core::models::risk::{AssessmentKind, RiskTier};
use mindcheck_scoring::error::AssessmentError;
use mindcheck_scoring::{ReferenceData, compute_result};

use common::*;

#[test]
fn full_questionnaire_outcome() {
    let form = five_question_form();
    let submission = Submission::Questionnaire(choose_values(&form, &[4, 4, 4, 3, 3]));

    let outcome = compute_result(Some(&form), &submission, &ReferenceData::default()).unwrap();
    assert_eq!(outcome.kind, AssessmentKind::Full);
    assert_eq!(outcome.total_score, 18);
    assert_eq!(outcome.band_score, 72);
    assert_eq!(outcome.risk_tier, RiskTier::High);
    assert_eq!(outcome.responses.len(), 5);
}

#[test]
fn quick_outcome() {
    // mood 3 + sleep 2 + stress (6 - 4) + social 3 + energy 2 = 12
    let submission = Submission::Quick(quick([3, 2, 4, 3, 2]));

    let outcome = compute_result(None, &submission, &ReferenceData::default()).unwrap();
    assert_eq!(outcome.kind, AssessmentKind::Quick);
    assert_eq!(outcome.total_score, 12);
    assert_eq!(outcome.risk_tier, RiskTier::Moderate);
}

#[test]
fn repeated_computation_is_identical() {
    let form = five_question_form();
    let submission = Submission::Questionnaire(choose_values(&form, &[2, 1, 2, 1, 3]));
    let reference = ReferenceData::default();

    let first = compute_result(Some(&form), &submission, &reference).unwrap();
    let second = compute_result(Some(&form), &submission, &reference).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mismatched_shapes_have_no_policy() {
    let form = five_question_form();
    let reference = ReferenceData::default();

    let err = compute_result(
        Some(&form),
        &Submission::Quick(quick([3, 3, 3, 3, 3])),
        &reference,
    )
    .unwrap_err();
    assert!(matches!(err, AssessmentError::UnknownAssessmentKind(_)));

    let err = compute_result(None, &Submission::Questionnaire(vec![]), &reference).unwrap_err();
    assert!(matches!(err, AssessmentError::UnknownAssessmentKind(_)));
}

#[test]
fn validation_errors_surface_from_aggregation() {
    let form = five_question_form();
    let mut answers = choose_values(&form, &[5, 5, 5, 5, 5]);
    answers.pop();

    let err = compute_result(
        Some(&form),
        &Submission::Questionnaire(answers),
        &ReferenceData::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AssessmentError::MissingRequiredAnswer { .. }));
}
