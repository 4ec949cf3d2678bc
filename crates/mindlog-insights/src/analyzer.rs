//! Trend, consistency and distribution statistics over a user's entry
//! history.

use std::collections::HashMap;

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::{Sentiment, SentimentDistribution};

use crate::config::PatternThresholds;

/// Direction of recent sentiment relative to the entries just before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improving,
    Declining,
    #[default]
    Stable,
}

/// Coarse reading of the mean mood score over the newest entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MoodPattern {
    #[default]
    InsufficientData,
    Positive,
    Neutral,
    Concerning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// Derived statistics over a full entry history. Never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPatternSnapshot {
    pub total_entries: u32,
    /// Counts per class over the full history.
    pub sentiment_distribution: SentimentDistribution,
    /// Negative share of the full history.
    pub negative_ratio: f64,
    /// Negative share of the trailing window.
    pub recent_negative_ratio: f64,
    /// Entries in the trailing window.
    pub consistency_score: u32,
    pub average_confidence: f64,
    pub recent_trend: Trend,
    pub mood_pattern: MoodPattern,
    pub frequent_words: Vec<WordCount>,
    /// UTC hours of day of the trailing-window entries, newest first.
    pub preferred_entry_times: Vec<u8>,
}

/// The part of a snapshot exposed to clients as "patterns".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternSummary {
    pub total_entries: u32,
    pub recent_trend: Trend,
    pub consistency_score: u32,
    pub sentiment_distribution: SentimentDistribution,
}

impl UserPatternSnapshot {
    pub fn summary(&self) -> PatternSummary {
        PatternSummary {
            total_entries: self.total_entries,
            recent_trend: self.recent_trend,
            consistency_score: self.consistency_score,
            sentiment_distribution: self.sentiment_distribution,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternAnalyzer {
    thresholds: PatternThresholds,
}

impl PatternAnalyzer {
    pub fn new(thresholds: PatternThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &PatternThresholds {
        &self.thresholds
    }

    /// Analyze a newest-first history as of `now`.
    pub fn analyze(&self, entries: &[JournalEntry], now: Timestamp) -> UserPatternSnapshot {
        if entries.is_empty() {
            return UserPatternSnapshot::default();
        }

        let recent: Vec<&JournalEntry> = self.recent_entries(entries, now).collect();
        let total = entries.len();

        let sentiment_distribution: SentimentDistribution =
            entries.iter().map(|e| e.sentiment).collect();
        let recent_negatives = recent
            .iter()
            .filter(|e| e.sentiment == Sentiment::Negative)
            .count();

        UserPatternSnapshot {
            total_entries: total as u32,
            sentiment_distribution,
            negative_ratio: sentiment_distribution.negative as f64 / total.max(1) as f64,
            recent_negative_ratio: recent_negatives as f64 / recent.len().max(1) as f64,
            consistency_score: recent.len() as u32,
            average_confidence: entries.iter().map(|e| e.confidence).sum::<f64>() / total as f64,
            recent_trend: self.trend(entries),
            mood_pattern: self.mood_pattern(entries),
            frequent_words: self.frequent_words(entries),
            preferred_entry_times: recent.iter().map(|e| utc_hour(e.created_at)).collect(),
        }
    }

    /// Entries created within the trailing window ending at `now`.
    pub fn recent_entries<'a>(
        &self,
        entries: &'a [JournalEntry],
        now: Timestamp,
    ) -> impl Iterator<Item = &'a JournalEntry> {
        let cutoff = window_start(now, self.thresholds.recent_window_days);
        entries.iter().filter(move |e| e.created_at >= cutoff)
    }

    /// Compare the newest `trend_window` entries with the next
    /// `trend_window`. A short previous group is averaged over what exists.
    pub fn trend(&self, entries: &[JournalEntry]) -> Trend {
        let t = &self.thresholds;
        if entries.len() < t.min_trend_entries.max(t.trend_window + 1) {
            return Trend::Stable;
        }

        let split = t.trend_window.min(entries.len());
        let end = (t.trend_window * 2).min(entries.len());
        let recent_mean = mean_sentiment(&entries[..split]);
        let previous_mean = mean_sentiment(&entries[split..end]);

        if recent_mean > previous_mean + t.trend_band {
            Trend::Improving
        } else if recent_mean < previous_mean - t.trend_band {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    pub fn mood_pattern(&self, entries: &[JournalEntry]) -> MoodPattern {
        let t = &self.thresholds;
        let window = &entries[..t.mood_window.min(entries.len())];
        if window.len() < t.mood_min_entries.max(1) {
            return MoodPattern::InsufficientData;
        }

        let average = window.iter().map(|e| e.mood_score).sum::<f64>() / window.len() as f64;
        if average >= t.mood_positive_min {
            MoodPattern::Positive
        } else if average <= t.mood_concerning_max {
            MoodPattern::Concerning
        } else {
            MoodPattern::Neutral
        }
    }

    /// Top words by raw count over the full history. Ties keep first-seen
    /// order.
    pub fn frequent_words(&self, entries: &[JournalEntry]) -> Vec<WordCount> {
        let mut counts: Vec<WordCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            for token in entry.text.split_whitespace() {
                let word = token.to_lowercase();
                if word.chars().count() <= self.thresholds.word_min_exclusive_len {
                    continue;
                }
                match index.get(&word) {
                    Some(&i) => counts[i].count += 1,
                    None => {
                        index.insert(word.clone(), counts.len());
                        counts.push(WordCount { word, count: 1 });
                    }
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(self.thresholds.frequent_words_limit);
        counts
    }
}

fn mean_sentiment(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|e| e.sentiment.score()).sum::<f64>() / entries.len() as f64
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Start of a trailing window of `days` days ending at `now`. Saturates at
/// the earliest representable instant.
pub(crate) fn window_start(now: Timestamp, days: i64) -> Timestamp {
    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| now.checked_sub(SignedDuration::from_secs(secs)).ok())
        .unwrap_or(Timestamp::MIN)
}

pub(crate) fn utc_hour(at: Timestamp) -> u8 {
    at.to_zoned(TimeZone::UTC).hour() as u8
}
