//! mindlog-classifier
//!
//! Sentiment classification for journal text. A classifier maps text to a
//! label, a confidence and a per-class distribution. Output always records
//! whether it came from a real model or from the deterministic fallback.

pub mod error;
pub mod fallback;
pub mod lexicon;
pub mod remote;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::sentiment::{Sentiment, SentimentScores};

use error::ClassifierError;

/// Where a classification came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ClassificationSource {
    Model { name: String },
    Fallback { reason: String },
}

impl ClassificationSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ClassificationSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub scores: SentimentScores,
    pub source: ClassificationSource,
}

impl Classification {
    /// Derived 1–10 mood score for this distribution.
    pub fn mood_score(&self) -> f64 {
        self.scores.mood_score()
    }
}

/// Text → sentiment. Implementations may block; async callers should run
/// them off the runtime's worker threads.
pub trait SentimentClassifier: Send + Sync {
    /// Short identifier used in logs and in `ClassificationSource::Model`.
    fn name(&self) -> &str;

    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(text)
    }
}

/// Sum of the three class probabilities may drift from 1 by this much.
pub const SCORE_SUM_TOLERANCE: f64 = 0.05;

/// Check a model distribution and renormalize it to sum to exactly 1.
pub fn normalize_scores(scores: SentimentScores) -> Result<SentimentScores, ClassifierError> {
    let values = [scores.positive, scores.neutral, scores.negative];
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(ClassifierError::ResponseParse(format!(
            "scores must be non-negative numbers: {scores:?}"
        )));
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > SCORE_SUM_TOLERANCE {
        return Err(ClassifierError::ResponseParse(format!(
            "scores sum to {sum:.3}, expected 1"
        )));
    }
    Ok(SentimentScores {
        positive: scores.positive / sum,
        neutral: scores.neutral / sum,
        negative: scores.negative / sum,
    })
}
