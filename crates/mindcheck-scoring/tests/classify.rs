use mindcheck_core::models::risk::{AssessmentKind, RiskTier};
use mindcheck_scoring::classify::{
    ClassificationPolicy, ScoreContext, ThresholdTable, classify, parse_kind,
};
use mindcheck_scoring::error::AssessmentError;
use mindcheck_scoring::reference::ReferenceData;

fn quick_tier(total: i64) -> RiskTier {
    let context = ScoreContext {
        kind: AssessmentKind::Quick,
        required_questions: 5,
    };
    classify(total, context, &ReferenceData::default())
        .unwrap()
        .tier
}

fn full_tier(total: i64, required_questions: usize) -> RiskTier {
    let context = ScoreContext {
        kind: AssessmentKind::Full,
        required_questions,
    };
    classify(total, context, &ReferenceData::default())
        .unwrap()
        .tier
}

#[test]
fn quick_thresholds_are_inclusive() {
    assert_eq!(quick_tier(25), RiskTier::High);
    assert_eq!(quick_tier(18), RiskTier::High);
    assert_eq!(quick_tier(17), RiskTier::Moderate);
    assert_eq!(quick_tier(12), RiskTier::Moderate);
    assert_eq!(quick_tier(11), RiskTier::Low);
    assert_eq!(quick_tier(0), RiskTier::Low);
}

#[test]
fn full_questionnaire_uses_percentage_of_maximum() {
    // 5 required questions: maximum 25
    assert_eq!(full_tier(18, 5), RiskTier::High);
    assert_eq!(full_tier(10, 5), RiskTier::Moderate);
    assert_eq!(full_tier(9, 5), RiskTier::Low);
}

#[test]
fn percentage_boundaries_belong_to_the_higher_band() {
    // 7 of 10 is exactly 70 %, 4 of 10 exactly 40 %
    assert_eq!(full_tier(7, 2), RiskTier::High);
    assert_eq!(full_tier(4, 2), RiskTier::Moderate);
    assert_eq!(full_tier(3, 2), RiskTier::Low);
}

#[test]
fn no_required_questions_is_always_low() {
    for total in [0, 10, 500] {
        assert_eq!(full_tier(total, 0), RiskTier::Low);
    }
}

#[test]
fn band_score_is_whole_percentage_for_full_and_raw_for_quick() {
    let reference = ReferenceData::default();
    let full = classify(
        18,
        ScoreContext {
            kind: AssessmentKind::Full,
            required_questions: 5,
        },
        &reference,
    )
    .unwrap();
    assert_eq!(full.band_score, 72);

    let quick = classify(
        14,
        ScoreContext {
            kind: AssessmentKind::Quick,
            required_questions: 5,
        },
        &reference,
    )
    .unwrap();
    assert_eq!(quick.band_score, 14);
}

#[test]
fn kind_without_policy_is_unknown() {
    let mut reference = ReferenceData::default();
    reference.policies.remove(&AssessmentKind::Quick);

    let err = classify(
        12,
        ScoreContext {
            kind: AssessmentKind::Quick,
            required_questions: 5,
        },
        &reference,
    )
    .unwrap_err();
    assert_eq!(err, AssessmentError::UnknownAssessmentKind("quick".to_string()));
}

#[test]
fn unrecognised_kind_tag_is_unknown() {
    assert_eq!(parse_kind("full").unwrap(), AssessmentKind::Full);
    assert_eq!(
        parse_kind("phq9").unwrap_err(),
        AssessmentError::UnknownAssessmentKind("phq9".to_string())
    );
}

#[test]
fn threshold_table_classifies_raw_values() {
    let policy = ClassificationPolicy::RawTotal {
        thresholds: ThresholdTable {
            high: 10,
            moderate: 5,
        },
    };
    assert_eq!(policy.evaluate(10, 0).tier, RiskTier::High);
    assert_eq!(policy.evaluate(5, 0).tier, RiskTier::Moderate);
    assert_eq!(policy.evaluate(-3, 0).tier, RiskTier::Low);
}
