use async_trait::async_trait;
use uuid::Uuid;

use mindlog_core::models::assessment::AssessmentResult;
use mindlog_core::models::entry::JournalEntry;

use crate::error::StorageError;

/// Append-only journal entry store, scoped per user.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn append(&self, entry: &JournalEntry) -> Result<(), StorageError>;

    /// Entries for `user_id`, newest first. `limit` keeps the newest `n`.
    async fn list(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>, StorageError>;

    /// Remove one of the user's own entries. Someone else's entry id is
    /// indistinguishable from a missing one.
    async fn delete(&self, user_id: &str, entry_id: Uuid) -> Result<(), StorageError>;
}

/// Completed questionnaire results, scoped per user.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    async fn save(&self, result: &AssessmentResult) -> Result<(), StorageError>;

    /// Results for `user_id`, newest first, optionally for one instrument.
    async fn list(
        &self,
        user_id: &str,
        test_id: Option<u32>,
    ) -> Result<Vec<AssessmentResult>, StorageError>;
}
