//! Deterministic keyword classifier. Used when no model is reachable and
//! in tests.

use mindlog_core::models::sentiment::{Sentiment, SentimentScores};

use crate::error::ClassifierError;
use crate::{Classification, ClassificationSource, SentimentClassifier};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "love", "excellent", "amazing", "wonderful", "grateful", "joy",
    "glad", "excited", "calm", "proud",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "hate", "awful", "horrible", "sad", "angry", "anxious", "stressed",
    "worried", "lonely", "exhausted", "overwhelmed", "hopeless",
];

/// Confidence with no keyword margin.
const BASE_CONFIDENCE: f64 = 0.6;
/// Added per keyword of margin between the winning and losing lists.
const MARGIN_STEP: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.95;
/// Share of the remaining probability given to the opposite pole.
const OPPOSITE_SHARE: f64 = 0.25;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub const NAME: &'static str = "lexicon";

    /// Keyword hits in `text` as (positive, negative).
    pub fn count_hits(text: &str) -> (usize, usize) {
        let mut positive = 0;
        let mut negative = 0;
        for word in text.split_whitespace() {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }
        (positive, negative)
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyText);
        }

        let (positive, negative) = Self::count_hits(text);
        let sentiment = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };
        let margin = positive.abs_diff(negative) as f64;
        let confidence = (BASE_CONFIDENCE + MARGIN_STEP * margin).min(MAX_CONFIDENCE);

        Ok(Classification {
            sentiment,
            confidence,
            scores: distribution(sentiment, confidence),
            source: ClassificationSource::Model {
                name: Self::NAME.to_string(),
            },
        })
    }
}

/// Put `confidence` on the winning class and split the rest, favouring
/// Neutral for polar labels and splitting evenly for Neutral.
fn distribution(sentiment: Sentiment, confidence: f64) -> SentimentScores {
    let rest = 1.0 - confidence;
    match sentiment {
        Sentiment::Positive => SentimentScores {
            positive: confidence,
            neutral: rest * (1.0 - OPPOSITE_SHARE),
            negative: rest * OPPOSITE_SHARE,
        },
        Sentiment::Negative => SentimentScores {
            positive: rest * OPPOSITE_SHARE,
            neutral: rest * (1.0 - OPPOSITE_SHARE),
            negative: confidence,
        },
        Sentiment::Neutral => SentimentScores {
            positive: rest / 2.0,
            neutral: confidence,
            negative: rest / 2.0,
        },
    }
}
