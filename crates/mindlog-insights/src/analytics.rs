//! Journal analytics for the dashboard: streaks, daily mood, time-of-day
//! and theme breakdowns. All calendar arithmetic is in UTC.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::{Sentiment, SentimentDistribution};

use crate::analyzer::{PatternAnalyzer, Trend, utc_hour};

/// Days looked back when counting a streak.
pub const STREAK_CAP_DAYS: u32 = 30;
pub const WEEKLY_TREND_DAYS: u32 = 7;

const THEMES: [(&str, &[&str]); 3] = [
    (
        "work",
        &["work", "job", "office", "meeting", "project", "deadline", "boss", "colleague"],
    ),
    (
        "relationships",
        &["friend", "family", "partner", "relationship", "love", "date", "social"],
    ),
    (
        "health",
        &["tired", "energy", "sleep", "exercise", "health", "doctor", "sick"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyMood {
    #[ts(type = "string")]
    pub date: Date,
    /// `None` on days without entries.
    pub average_mood: Option<f64>,
    pub entry_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..12 => TimeOfDay::Morning,
            12..18 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodStats {
    pub entry_count: u32,
    pub average_mood: Option<f64>,
    pub sentiment_counts: SentimentDistribution,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeOfDayPatterns {
    pub morning: PeriodStats,
    pub afternoon: PeriodStats,
    pub evening: PeriodStats,
}

impl TimeOfDayPatterns {
    pub fn get(&self, period: TimeOfDay) -> &PeriodStats {
        match period {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThemeCount {
    pub theme: String,
    pub mentions: u32,
}

/// Share of entries per class, in percent with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentPercentages {
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Neutral")]
    pub neutral: f64,
    #[serde(rename = "Negative")]
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JournalAnalytics {
    pub total_entries: u32,
    pub average_mood: f64,
    pub average_confidence: f64,
    pub dominant_sentiment: Option<Sentiment>,
    pub entries_this_week: u32,
    pub current_streak: u32,
    pub recent_trend: Trend,
    pub sentiment_distribution: SentimentDistribution,
    pub sentiment_percentages: SentimentPercentages,
    pub weekly_mood: Vec<DailyMood>,
    pub time_of_day: TimeOfDayPatterns,
    pub common_themes: Vec<ThemeCount>,
}

impl JournalAnalytics {
    /// Build the full overview from a newest-first history.
    pub fn from_entries(analyzer: &PatternAnalyzer, entries: &[JournalEntry], now: Timestamp) -> Self {
        let snapshot = analyzer.analyze(entries, now);
        let dist = snapshot.sentiment_distribution;
        let total = dist.total();

        let percent = |count: u32| {
            if total == 0 {
                0.0
            } else {
                round1(count as f64 / total as f64 * 100.0)
            }
        };

        Self {
            total_entries: snapshot.total_entries,
            average_mood: mean(entries.iter().map(|e| e.mood_score)).map(round1).unwrap_or(0.0),
            average_confidence: (snapshot.average_confidence * 100.0).round() / 100.0,
            dominant_sentiment: dist.dominant(),
            entries_this_week: snapshot.consistency_score,
            current_streak: streak(entries, now),
            recent_trend: snapshot.recent_trend,
            sentiment_distribution: dist,
            sentiment_percentages: SentimentPercentages {
                positive: percent(dist.positive),
                neutral: percent(dist.neutral),
                negative: percent(dist.negative),
            },
            weekly_mood: weekly_mood_trend(entries, now, WEEKLY_TREND_DAYS),
            time_of_day: time_of_day_patterns(entries),
            common_themes: common_themes(entries),
        }
    }
}

/// Consecutive days with at least one entry, counting back from today.
/// An empty today does not break the streak.
pub fn streak(entries: &[JournalEntry], now: Timestamp) -> u32 {
    let mut day = utc_date(now);
    let mut count = 0;

    for i in 0..STREAK_CAP_DAYS {
        if entries.iter().any(|e| utc_date(e.created_at) == day) {
            count += 1;
        } else if i > 0 {
            break;
        }
        day = match day.yesterday() {
            Ok(d) => d,
            Err(_) => break,
        };
    }
    count
}

/// Average mood per calendar day over the last `days` days, oldest first.
pub fn weekly_mood_trend(entries: &[JournalEntry], now: Timestamp, days: u32) -> Vec<DailyMood> {
    let mut trend = Vec::with_capacity(days as usize);
    let mut day = utc_date(now);

    for _ in 0..days {
        let moods: Vec<f64> = entries
            .iter()
            .filter(|e| utc_date(e.created_at) == day)
            .map(|e| e.mood_score)
            .collect();
        trend.push(DailyMood {
            date: day,
            average_mood: mean(moods.iter().copied()).map(round1),
            entry_count: moods.len() as u32,
        });
        day = match day.yesterday() {
            Ok(d) => d,
            Err(_) => break,
        };
    }

    trend.reverse();
    trend
}

pub fn time_of_day_patterns(entries: &[JournalEntry]) -> TimeOfDayPatterns {
    let stats = |period: TimeOfDay| {
        let in_period: Vec<&JournalEntry> = entries
            .iter()
            .filter(|e| TimeOfDay::from_hour(utc_hour(e.created_at)) == period)
            .collect();
        PeriodStats {
            entry_count: in_period.len() as u32,
            average_mood: mean(in_period.iter().map(|e| e.mood_score)).map(round1),
            sentiment_counts: in_period.iter().map(|e| e.sentiment).collect(),
        }
    };

    TimeOfDayPatterns {
        morning: stats(TimeOfDay::Morning),
        afternoon: stats(TimeOfDay::Afternoon),
        evening: stats(TimeOfDay::Evening),
    }
}

/// Keyword-group mentions across all entries, most mentioned first. Words
/// are matched whole, ignoring case and surrounding punctuation. Themes
/// with no mentions are omitted.
pub fn common_themes(entries: &[JournalEntry]) -> Vec<ThemeCount> {
    let mut counts: Vec<ThemeCount> = THEMES
        .iter()
        .map(|(theme, keywords)| ThemeCount {
            theme: theme.to_string(),
            mentions: entries
                .iter()
                .flat_map(|e| words(&e.text))
                .filter(|w| keywords.contains(&w.as_str()))
                .count() as u32,
        })
        .filter(|t| t.mentions > 0)
        .collect();
    counts.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    counts
}

/// Lowercased words with leading and trailing punctuation stripped.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}

fn utc_date(at: Timestamp) -> Date {
    at.to_zoned(TimeZone::UTC).date()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
