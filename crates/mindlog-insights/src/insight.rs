//! One personalized message per request, picked by a fixed priority
//! cascade over the pattern snapshot.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::Sentiment;

use crate::analyzer::{Trend, UserPatternSnapshot};
use crate::config::InsightThresholds;

/// Negatives among this many newest entries are quoted in the support
/// message.
const SUPPORT_LOOKBACK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightKind {
    Welcome,
    BuildingProfile,
    Support,
    Celebration,
    Consistency,
    Intervention,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    thresholds: InsightThresholds,
}

impl InsightGenerator {
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// First matching rule wins. `history` is the newest-first list the
    /// snapshot was computed from.
    pub fn generate(
        &self,
        snapshot: &UserPatternSnapshot,
        current_sentiment: Sentiment,
        history: &[JournalEntry],
    ) -> Insight {
        let t = &self.thresholds;
        let total = snapshot.total_entries;
        let dist = &snapshot.sentiment_distribution;

        if total == 0 {
            return insight(
                InsightKind::Welcome,
                "Welcome to your journal",
                "Write your first entry to start building a picture of your emotional \
                 patterns. Personalized insights and coping strategies unlock as you go."
                    .to_string(),
                Priority::High,
            );
        }

        if total < t.profile_min_entries {
            return insight(
                InsightKind::BuildingProfile,
                "Learning your patterns",
                format!(
                    "Great start! You've written {total} {}. A few more and patterns in how \
                     you feel will start to show.",
                    plural(total, "entry", "entries")
                ),
                Priority::Medium,
            );
        }

        match snapshot.recent_trend {
            Trend::Declining => {
                let lookback = &history[..SUPPORT_LOOKBACK.min(history.len())];
                let negatives = lookback
                    .iter()
                    .filter(|e| e.sentiment == Sentiment::Negative)
                    .count();
                return insight(
                    InsightKind::Support,
                    "Support is here",
                    format!(
                        "Your recent entries have been harder than the ones before \
                         ({negatives} of your last {} read as negative). Difficult stretches \
                         pass. The strategies below were picked for this moment.",
                        lookback.len()
                    ),
                    Priority::High,
                );
            }
            Trend::Improving => {
                return insight(
                    InsightKind::Celebration,
                    "You're trending upward",
                    format!(
                        "Your recent entries are more positive than the ones before. \
                         {} of your {total} entries have been positive so far. Keep doing \
                         what's working.",
                        dist.positive
                    ),
                    Priority::High,
                );
            }
            Trend::Stable => {}
        }

        if snapshot.consistency_score >= t.consistency_praise_min {
            return insight(
                InsightKind::Consistency,
                "Consistency pays off",
                format!(
                    "You've journaled {} times this week. Regular reflection is one of the \
                     most reliable ways to build emotional awareness.",
                    snapshot.consistency_score
                ),
                Priority::Medium,
            );
        }

        if snapshot.negative_ratio > t.intervention_negative_ratio {
            return insight(
                InsightKind::Intervention,
                "Targeted support",
                format!(
                    "{} of your {total} entries carry challenging emotions. The strategies \
                     below are the most effective ones for patterns like yours.",
                    dist.negative
                ),
                Priority::High,
            );
        }

        insight(
            InsightKind::Balanced,
            "Steady reflection",
            format!(
                "Across {total} entries you've recorded {} positive, {} neutral and {} \
                 negative moments. Today's entry reads as {}.",
                dist.positive,
                dist.neutral,
                dist.negative,
                current_sentiment.as_str().to_lowercase()
            ),
            Priority::Medium,
        )
    }
}

fn insight(kind: InsightKind, title: &str, message: String, priority: Priority) -> Insight {
    Insight {
        kind,
        title: title.to_string(),
        message,
        priority,
    }
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
