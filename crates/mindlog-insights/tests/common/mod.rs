#![allow(dead_code)]

use jiff::{SignedDuration, Timestamp};

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::{Sentiment, SentimentScores};

/// Fixed "now" for every analysis test: a Tuesday, 15:00 UTC.
pub fn now() -> Timestamp {
    "2026-03-10T15:00:00Z".parse().unwrap()
}

pub fn hours_ago(hours: i64) -> Timestamp {
    now().checked_sub(SignedDuration::from_hours(hours)).unwrap()
}

pub fn scores_for(sentiment: Sentiment) -> SentimentScores {
    match sentiment {
        Sentiment::Positive => SentimentScores {
            positive: 0.8,
            neutral: 0.15,
            negative: 0.05,
        },
        Sentiment::Neutral => SentimentScores {
            positive: 0.1,
            neutral: 0.8,
            negative: 0.1,
        },
        Sentiment::Negative => SentimentScores {
            positive: 0.05,
            neutral: 0.15,
            negative: 0.8,
        },
    }
}

pub fn entry_at(sentiment: Sentiment, text: &str, created_at: Timestamp) -> JournalEntry {
    JournalEntry::new(
        "user-1",
        text,
        sentiment,
        0.8,
        scores_for(sentiment),
        Vec::new(),
        created_at,
    )
}

/// Newest-first history, one entry per hour starting an hour ago.
pub fn history(sentiments: &[Sentiment]) -> Vec<JournalEntry> {
    sentiments
        .iter()
        .enumerate()
        .map(|(i, s)| entry_at(*s, "an ordinary day", hours_ago(i as i64 + 1)))
        .collect()
}
