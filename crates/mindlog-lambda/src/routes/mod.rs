pub mod assessments;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod instruments;
pub mod journal;
pub mod recommendations;

use std::collections::BTreeMap;

use jiff::Timestamp;

use mindlog_core::models::assessment::{self, AssessmentResult};
use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::Sentiment;
use mindlog_insights::Evaluation;

use crate::error::ApiError;
use crate::state::AppContext;

/// Strategies shown alongside a single insight.
pub const TOP_STRATEGIES: usize = 3;

/// A user's full history as the insight engine consumes it.
pub struct History {
    pub entries: Vec<JournalEntry>,
    pub results: Vec<AssessmentResult>,
    pub latest: BTreeMap<u32, AssessmentResult>,
}

impl History {
    pub async fn load(ctx: &AppContext, user_id: &str) -> Result<Self, ApiError> {
        let entries = ctx.entries.list(user_id, None).await?;
        let results = ctx.assessments.list(user_id, None).await?;
        let latest = assessment::latest_per_test(&results);
        Ok(Self {
            entries,
            results,
            latest,
        })
    }

    /// Run the engine, using `current` or else the newest entry's sentiment.
    pub fn evaluate(
        &self,
        ctx: &AppContext,
        user_id: &str,
        current: Option<Sentiment>,
        now: Timestamp,
    ) -> Evaluation {
        let current =
            current.unwrap_or_else(|| mindlog_insights::current_sentiment(&self.entries));
        let evaluation = ctx.engine.evaluate(&self.entries, current, &self.latest, now);
        tracing::debug!(
            user_id,
            entries = self.entries.len(),
            insight = ?evaluation.insight.kind,
            strategies = evaluation.strategies.len(),
            should_notify = evaluation.should_notify,
            "evaluated patterns"
        );
        evaluation
    }
}
