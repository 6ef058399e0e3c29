//! Integration tests against a real bucket.
//!
//! These tests call S3 and require valid credentials in the environment plus
//! `MINDCHECK_TEST_BUCKET`. Set `MINDCHECK_S3_ENDPOINT` to use MinIO or
//! another S3-compatible server.
//!
//! Run with: `cargo test -p mindcheck-storage --test s3_store -- --ignored`

use uuid::Uuid;

use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::questionnaire::{Question, QuestionKind, Questionnaire};
use mindcheck_core::models::record::AssessmentRecord;
use mindcheck_core::models::risk::{AssessmentKind, RiskTier};
use mindcheck_scoring::store::AssessmentStore;
use mindcheck_storage::client::build_client;
use mindcheck_storage::error::StorageError;
use mindcheck_storage::store::S3Store;

async fn test_store() -> S3Store {
    let bucket = std::env::var("MINDCHECK_TEST_BUCKET").expect("MINDCHECK_TEST_BUCKET must be set");
    let endpoint = std::env::var("MINDCHECK_S3_ENDPOINT").ok();
    let client = build_client(endpoint.as_deref()).await;
    S3Store::new(client, bucket)
}

fn record(owner: &OwnerTag) -> AssessmentRecord {
    AssessmentRecord {
        id: Uuid::new_v4(),
        kind: AssessmentKind::Quick,
        questionnaire_id: None,
        questionnaire_name: "Quick Assessment".to_string(),
        owner: Some(owner.clone()),
        total_score: 14,
        band_score: 14,
        risk_level: RiskTier::Moderate,
        completed_at: jiff::Timestamp::now(),
        responses: vec![],
    }
}

#[tokio::test]
#[ignore]
async fn questionnaire_round_trip() {
    let store = test_store().await;
    let now = jiff::Timestamp::now();
    let questionnaire = Questionnaire {
        id: Uuid::new_v4(),
        name: "Integration questionnaire".to_string(),
        description: String::new(),
        is_active: true,
        questions: vec![Question {
            id: Uuid::new_v4(),
            text: "How are you feeling?".to_string(),
            kind: QuestionKind::Scale10,
            order: 1,
            is_required: true,
            options: vec![],
        }],
        created_at: now,
        updated_at: now,
    };

    store.save_questionnaire(&questionnaire).await.unwrap();
    let loaded = store.load_questionnaire(questionnaire.id).await.unwrap();
    assert_eq!(loaded, questionnaire);
}

#[tokio::test]
#[ignore]
async fn results_are_write_once_and_indexed_by_owner() {
    let store = test_store().await;
    let owner = OwnerTag::anonymous();
    let record = record(&owner);

    store.store_result(&record).await.unwrap();
    let err = store.store_result(&record).await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists { .. }));

    assert_eq!(store.load_result(record.id).await.unwrap(), record);
    let history = store.list_owner_results(&owner).await.unwrap();
    assert_eq!(history, vec![record]);
}

#[tokio::test]
#[ignore]
async fn missing_result_is_not_found() {
    let store = test_store().await;
    let err = store.load_result(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
