use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use mindlog_core::keys;
use mindlog_core::models::assessment::{self, AssessmentResult};
use mindlog_core::models::entry::{self, JournalEntry};

use crate::error::StorageError;
use crate::repository::{AssessmentRepository, EntryRepository};

/// Process-local store keyed by user id. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<JournalEntry>>>,
    results: RwLock<HashMap<String, Vec<AssessmentResult>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for MemoryStore {
    async fn append(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>, StorageError> {
        let mut entries = self
            .entries
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        entry::sort_newest_first(&mut entries);
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    async fn delete(&self, user_id: &str, entry_id: Uuid) -> Result<(), StorageError> {
        let mut guard = self.entries.write().await;
        let entries = guard.get_mut(user_id);
        let position = entries
            .as_ref()
            .and_then(|list| list.iter().position(|e| e.id == entry_id));
        match (entries, position) {
            (Some(list), Some(index)) => {
                list.remove(index);
                Ok(())
            }
            _ => Err(StorageError::NotFound {
                key: keys::entry(user_id, entry_id),
            }),
        }
    }
}

#[async_trait]
impl AssessmentRepository for MemoryStore {
    async fn save(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        self.results
            .write()
            .await
            .entry(result.user_id.clone())
            .or_default()
            .push(result.clone());
        Ok(())
    }

    async fn list(
        &self,
        user_id: &str,
        test_id: Option<u32>,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results: Vec<AssessmentResult> = self
            .results
            .read()
            .await
            .get(user_id)
            .map(|list| {
                list.iter()
                    .filter(|r| test_id.is_none_or(|id| r.test_id == id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        assessment::sort_newest_first(&mut results);
        Ok(results)
    }
}
