use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::sentiment::{Sentiment, SentimentScores};

/// A classified journal entry. Immutable once created; only deletion by the
/// owning user is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub scores: SentimentScores,
    pub mood_score: f64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: jiff::Timestamp,
}

impl JournalEntry {
    /// Build an entry from a classification result. The mood score is
    /// always derived from `scores`, never taken from the caller.
    pub fn new(
        user_id: impl Into<String>,
        text: impl Into<String>,
        sentiment: Sentiment,
        confidence: f64,
        scores: SentimentScores,
        tags: impl IntoIterator<Item = String>,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            text: text.into(),
            sentiment,
            confidence: confidence.clamp(0.0, 1.0),
            mood_score: scores.mood_score(),
            scores,
            tags: tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            created_at,
        }
    }
}

/// Request body for submitting a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewJournalEntry {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Sort entries newest-first by `created_at`. Stable, so entries sharing a
/// timestamp keep their relative order.
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
