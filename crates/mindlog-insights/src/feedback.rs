//! Immediate feedback on a single entry: emotion keywords found in the text
//! and a one-line recommendation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::Sentiment;

use crate::analytics::words;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "grateful", "excited", "joy", "love", "amazing", "wonderful", "great", "good",
    "accomplished",
];

const NEGATIVE_WORDS: &[&str] = &[
    "stressed", "anxious", "overwhelmed", "sad", "tired", "frustrated", "worried", "difficult",
    "challenging",
];

/// Below this mood score an entry gets a coping suggestion regardless of
/// its label.
const LOW_MOOD: f64 = 4.0;
/// Above this mood score a positive entry gets reinforcement.
const HIGH_MOOD: f64 = 7.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionKeywords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationKind {
    CopingStrategy,
    PositiveReinforcement,
    GeneralWellness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryFeedback {
    pub keywords: EmotionKeywords,
    pub recommendation: Recommendation,
}

pub fn entry_feedback(entry: &JournalEntry) -> EntryFeedback {
    EntryFeedback {
        keywords: emotion_keywords(&entry.text),
        recommendation: recommend(entry.sentiment, entry.mood_score),
    }
}

/// Listed emotion words present in `text`, each reported once, in list
/// order.
pub fn emotion_keywords(text: &str) -> EmotionKeywords {
    let found: Vec<String> = words(text).collect();
    let pick = |list: &[&str]| -> Vec<String> {
        list.iter()
            .filter(|w| found.iter().any(|f| f.as_str() == **w))
            .map(|w| w.to_string())
            .collect()
    };

    EmotionKeywords {
        positive: pick(POSITIVE_WORDS),
        negative: pick(NEGATIVE_WORDS),
    }
}

pub fn recommend(sentiment: Sentiment, mood_score: f64) -> Recommendation {
    let (kind, message) = if sentiment == Sentiment::Negative || mood_score < LOW_MOOD {
        (
            RecommendationKind::CopingStrategy,
            "Consider trying a breathing exercise or mindfulness practice to help manage \
             these feelings.",
        )
    } else if sentiment == Sentiment::Positive && mood_score > HIGH_MOOD {
        (
            RecommendationKind::PositiveReinforcement,
            "Great to see you're feeling positive! Consider reflecting on what contributed \
             to this mood.",
        )
    } else {
        (
            RecommendationKind::GeneralWellness,
            "Keep up with regular journaling to track your emotional patterns.",
        )
    };

    Recommendation {
        kind,
        message: message.to_string(),
    }
}
