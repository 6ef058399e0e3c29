use serde_json::json;
use uuid::Uuid;

use mindcheck_core::models::answer::{AnswerValue, QuickItem, Submission};
use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::questionnaire::{Question, QuestionKind};
use mindcheck_core::models::risk::{AssessmentKind, RiskTier};

#[test]
fn question_kinds_use_legacy_wire_names() {
    assert_eq!(json!(QuestionKind::Scale5), json!("scale"));
    assert_eq!(json!(QuestionKind::Scale10), json!("scale_extended"));
    assert_eq!(
        "multiple_choice".parse::<QuestionKind>().unwrap(),
        QuestionKind::MultipleChoice
    );
    assert!("slider".parse::<QuestionKind>().is_err());
}

#[test]
fn only_scales_have_bounds() {
    assert_eq!(QuestionKind::Scale5.scale_bounds(), Some((1, 5)));
    assert_eq!(QuestionKind::Scale10.scale_bounds(), Some((1, 10)));
    assert_eq!(QuestionKind::SingleChoice.scale_bounds(), None);
    assert_eq!(QuestionKind::Text.scale_bounds(), None);
}

#[test]
fn question_defaults_to_required() {
    let question: Question = serde_json::from_value(json!({
        "id": Uuid::nil(),
        "text": "How has your sleep been?",
        "kind": "scale",
    }))
    .unwrap();
    assert!(question.is_required);
    assert!(question.options.is_empty());
    assert_eq!(question.order, 0);
}

#[test]
fn submission_wire_format() {
    let option_id = Uuid::new_v4();
    let question_id = Uuid::new_v4();
    let submission: Submission = serde_json::from_value(json!({
        "kind": "questionnaire",
        "answers": [
            { "question_id": question_id, "answer": { "type": "choice", "option_id": option_id } }
        ]
    }))
    .unwrap();

    match submission {
        Submission::Questionnaire(answers) => {
            assert_eq!(answers[0].question_id, question_id);
            assert_eq!(answers[0].answer, AnswerValue::Choice { option_id });
        }
        Submission::Quick(_) => panic!("expected questionnaire answers"),
    }

    let quick: Submission = serde_json::from_value(json!({
        "kind": "quick",
        "answers": [ { "item": "stress", "value": 2 } ]
    }))
    .unwrap();
    assert!(matches!(quick, Submission::Quick(ref a) if a[0].item == QuickItem::Stress));
}

#[test]
fn risk_tiers_are_ordered_and_labelled() {
    assert!(RiskTier::Low < RiskTier::Moderate);
    assert!(RiskTier::Moderate < RiskTier::High);
    assert_eq!(RiskTier::High.label(), "High Risk");
    assert_eq!("moderate".parse::<RiskTier>().unwrap(), RiskTier::Moderate);
    assert_eq!("quick".parse::<AssessmentKind>().unwrap(), AssessmentKind::Quick);
    assert!("weekly".parse::<AssessmentKind>().is_err());
}

#[test]
fn owner_tags_are_key_safe() {
    assert!("anon_3f2a9c1d".parse::<OwnerTag>().is_ok());
    assert!("user-42".parse::<OwnerTag>().is_ok());
    assert!("".parse::<OwnerTag>().is_err());
    assert!("../results".parse::<OwnerTag>().is_err());
    assert!("a b".parse::<OwnerTag>().is_err());
    assert!("x".repeat(101).parse::<OwnerTag>().is_err());

    let generated = OwnerTag::anonymous();
    assert!(generated.as_str().starts_with("anon_"));
    assert!(generated.as_str().parse::<OwnerTag>().is_ok());
}

#[test]
fn owner_tag_rejects_bad_input_when_deserialized() {
    assert!(serde_json::from_value::<OwnerTag>(json!("ok_tag")).is_ok());
    assert!(serde_json::from_value::<OwnerTag>(json!("not/ok")).is_err());
}

#[test]
fn owner_tag_binding_is_a_plain_string() {
    use ts_rs::TS;

    assert_eq!(OwnerTag::inline(&ts_rs::Config::default()), "string");
}
