use aws_sdk_s3::Client;
use uuid::Uuid;

use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::models::questionnaire::Questionnaire;
use mindcheck_core::models::record::AssessmentRecord;
use mindcheck_core::models::resource::Resource;
use mindcheck_core::storage_keys;
use mindcheck_scoring::store::AssessmentStore;

use crate::error::StorageError;
use crate::json;
use crate::objects::{self, WriteMode};
use crate::results::{self, ObjectSink};

/// Questionnaires, results and resources kept as JSON objects in one bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub async fn list_questionnaires(&self) -> Result<Vec<Questionnaire>, StorageError> {
        let mut questionnaires: Vec<Questionnaire> =
            json::load_all_json(&self.client, &self.bucket, storage_keys::QUESTIONNAIRES_PREFIX)
                .await?;
        questionnaires.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(questionnaires)
    }

    pub async fn save_questionnaire(&self, questionnaire: &Questionnaire) -> Result<(), StorageError> {
        let key = storage_keys::questionnaire(questionnaire.id);
        json::save_json(&self.client, &self.bucket, &key, questionnaire).await?;
        tracing::info!(questionnaire_id = %questionnaire.id, "questionnaire saved");
        Ok(())
    }

    pub async fn load_result(&self, id: Uuid) -> Result<AssessmentRecord, StorageError> {
        json::load_json(&self.client, &self.bucket, &storage_keys::result(id)).await
    }

    /// Every result stored for `owner`, in no particular order.
    pub async fn list_owner_results(
        &self,
        owner: &OwnerTag,
    ) -> Result<Vec<AssessmentRecord>, StorageError> {
        let prefix = storage_keys::owner_results_prefix(owner);
        json::load_all_json(&self.client, &self.bucket, &prefix).await
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>, StorageError> {
        let mut resources: Vec<Resource> =
            json::load_all_json(&self.client, &self.bucket, storage_keys::RESOURCES_PREFIX).await?;
        resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(resources)
    }

    pub async fn load_resource(&self, id: Uuid) -> Result<Resource, StorageError> {
        json::load_json(&self.client, &self.bucket, &storage_keys::resource(id)).await
    }

    pub async fn save_resource(&self, resource: &Resource) -> Result<(), StorageError> {
        let key = storage_keys::resource(resource.id);
        json::save_json(&self.client, &self.bucket, &key, resource).await?;
        Ok(())
    }
}

impl AssessmentStore for S3Store {
    type Error = StorageError;

    async fn load_questionnaire(&self, id: Uuid) -> Result<Questionnaire, StorageError> {
        json::load_json(&self.client, &self.bucket, &storage_keys::questionnaire(id)).await
    }

    /// Results are write-once. See [`results::write_result`] for the
    /// order the two keys are written in.
    async fn store_result(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        results::write_result(self, record).await?;
        tracing::debug!(result_id = %record.id, "result stored");
        Ok(())
    }
}

impl ObjectSink for S3Store {
    async fn create(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        objects::put_object(
            &self.client,
            &self.bucket,
            key,
            body,
            json::CONTENT_TYPE,
            WriteMode::CreateOnly,
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        objects::delete_object(&self.client, &self.bucket, key).await
    }
}
