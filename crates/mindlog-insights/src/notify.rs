use mindlog_core::models::sentiment::Sentiment;

use crate::analyzer::{Trend, UserPatternSnapshot};
use crate::config::NotificationThresholds;

/// Decides whether a newly created entry should surface a push
/// notification.
#[derive(Debug, Clone, Default)]
pub struct NotificationGate {
    thresholds: NotificationThresholds,
}

impl NotificationGate {
    pub fn new(thresholds: NotificationThresholds) -> Self {
        Self { thresholds }
    }

    /// True when any rule holds.
    pub fn should_notify(&self, snapshot: &UserPatternSnapshot, current_sentiment: Sentiment) -> bool {
        let t = &self.thresholds;

        snapshot.total_entries <= t.early_user_max_entries
            || (current_sentiment == Sentiment::Negative
                && snapshot.recent_negative_ratio > t.recent_negative_ratio)
            || snapshot.recent_trend == Trend::Declining
            || snapshot.negative_ratio > t.negative_ratio
            || snapshot.consistency_score >= t.high_consistency
            || snapshot.recent_trend == Trend::Improving
            || (current_sentiment == Sentiment::Positive
                && snapshot.negative_ratio > t.positive_against_ratio)
            || snapshot.consistency_score >= t.min_consistency
    }
}
