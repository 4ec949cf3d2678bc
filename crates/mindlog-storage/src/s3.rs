use async_trait::async_trait;
use aws_sdk_s3::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use mindlog_core::keys;
use mindlog_core::models::assessment::{self, AssessmentResult};
use mindlog_core::models::entry::{self, JournalEntry};

use crate::error::StorageError;
use crate::repository::{AssessmentRepository, EntryRepository};
use crate::{objects, state};

/// One JSON object per record under `users/{user_id}/...`.
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

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Raw analysis tuning document, if one has been uploaded.
    pub async fn load_analysis_config(&self) -> Result<Option<serde_json::Value>, StorageError> {
        state::load_json_opt(&self.client, &self.bucket, keys::ANALYSIS_CONFIG).await
    }

    async fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        let mut records = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            records.push(state::load_json(&self.client, &self.bucket, key).await?);
        }
        Ok(records)
    }
}

#[async_trait]
impl EntryRepository for S3Store {
    async fn append(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        let key = keys::entry(&entry.user_id, entry.id);
        state::save_json(&self.client, &self.bucket, &key, entry).await?;
        info!(user_id = %entry.user_id, entry_id = %entry.id, "journal entry stored");
        Ok(())
    }

    async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>, StorageError> {
        let mut entries: Vec<JournalEntry> =
            self.load_all(&keys::entries_prefix(user_id)).await?;
        entry::sort_newest_first(&mut entries);
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        debug!(user_id, count = entries.len(), "listed journal entries");
        Ok(entries)
    }

    async fn delete(&self, user_id: &str, entry_id: Uuid) -> Result<(), StorageError> {
        let key = keys::entry(user_id, entry_id);
        if !objects::object_exists(&self.client, &self.bucket, &key).await? {
            return Err(StorageError::NotFound { key });
        }
        objects::delete_object(&self.client, &self.bucket, &key).await?;
        info!(user_id, entry_id = %entry_id, "journal entry deleted");
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for S3Store {
    async fn save(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        let key = keys::assessment(&result.user_id, result.id);
        state::save_json(&self.client, &self.bucket, &key, result).await?;
        info!(
            user_id = %result.user_id,
            test_id = result.test_id,
            severity = %result.severity_level,
            "assessment result stored"
        );
        Ok(())
    }

    async fn list(
        &self,
        user_id: &str,
        test_id: Option<u32>,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results: Vec<AssessmentResult> =
            self.load_all(&keys::assessments_prefix(user_id)).await?;
        if let Some(test_id) = test_id {
            results.retain(|r| r.test_id == test_id);
        }
        assessment::sort_newest_first(&mut results);
        debug!(user_id, count = results.len(), "listed assessment results");
        Ok(results)
    }
}
