//! Writing a result under both of its keys.
//!
//! The owner's history copy is created first and the canonical
//! `results/{id}.json` object last. A canonical object therefore only
//! exists once the history entry does; when the canonical write fails the
//! history copy is removed again, so a failed submission leaves nothing
//! behind and the caller can safely resubmit.

use std::future::Future;

use mindcheck_core::models::record::AssessmentRecord;
use mindcheck_core::storage_keys;

use crate::error::StorageError;

/// Create-only writes and deletes by key.
pub trait ObjectSink: Sync {
    /// Store `body` under `key`, failing if the key is already taken.
    fn create(&self, key: &str, body: Vec<u8>) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Write `record` as its owner copy (if it has an owner) and then its
/// canonical object.
pub async fn write_result<S: ObjectSink>(sink: &S, record: &AssessmentRecord) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(record)?;
    let key = storage_keys::result(record.id);
    let owner_key = record
        .owner
        .as_ref()
        .map(|owner| storage_keys::owner_result(owner, record.id));

    if let Some(owner_key) = &owner_key {
        sink.create(owner_key, body.clone()).await?;
    }

    let Err(err) = sink.create(&key, body).await else {
        return Ok(());
    };

    if let Some(owner_key) = &owner_key {
        match sink.delete(owner_key).await {
            Ok(()) => tracing::warn!(
                result_key = %key,
                owner_key = %owner_key,
                error = %err,
                "result write failed, owner copy removed"
            ),
            Err(rollback) => tracing::error!(
                result_key = %key,
                owner_key = %owner_key,
                error = %err,
                rollback_error = %rollback,
                "result write failed and owner copy could not be removed"
            ),
        }
    }

    Err(err)
}
