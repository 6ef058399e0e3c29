use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};
use tokio::task::JoinSet;

use crate::error::StorageError;
use crate::objects::{self, WriteMode};

pub(crate) const CONTENT_TYPE: &str = "application/json";

/// Load a JSON document from S3.
pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let body = objects::get_object(client, bucket, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a JSON document to S3. Returns the new ETag.
pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, CONTENT_TYPE, WriteMode::Overwrite).await
}

/// Load every `.json` document under a prefix, fetching concurrently.
///
/// Order of the returned documents is unspecified.
pub async fn load_all_json<T>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned + Send + 'static,
{
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut tasks = JoinSet::new();
    for key in keys.into_iter().filter(|k| k.ends_with(".json")) {
        let client = client.clone();
        let bucket = bucket.to_string();
        tasks.spawn(async move { load_json::<T>(&client, &bucket, &key).await });
    }

    let mut documents = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        documents.push(joined??);
    }
    Ok(documents)
}
