use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Classifier output label for a single journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Ordinal used when comparing sentiment windows: Positive 3, Neutral 2, Negative 1.
    pub fn score(self) -> f64 {
        match self {
            Sentiment::Positive => 3.0,
            Sentiment::Neutral => 2.0,
            Sentiment::Negative => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    /// Accepts the capitalized labels as well as the lowercase and
    /// `LABEL_n` forms that classifier backends tend to emit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "label_2" => Ok(Sentiment::Positive),
            "neutral" | "neu" | "label_1" => Ok(Sentiment::Neutral),
            "negative" | "neg" | "label_0" => Ok(Sentiment::Negative),
            _ => Err(CoreError::InvalidSentiment(s.to_string())),
        }
    }
}

/// Per-class probability distribution. The three keys are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentScores {
    pub const MOOD_MIN: f64 = 1.0;
    pub const MOOD_MAX: f64 = 10.0;

    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Label with the highest probability. Ties resolve Positive, Neutral, Negative.
    pub fn dominant(&self) -> Sentiment {
        Sentiment::ALL
            .into_iter()
            .fold(Sentiment::Positive, |best, s| {
                if self.get(s) > self.get(best) { s } else { best }
            })
    }

    /// Derived 1–10 mood score: `positive*10 + neutral*5.5 + negative*2`,
    /// rounded to one decimal.
    pub fn mood_score(&self) -> f64 {
        let raw = self.positive * 10.0 + self.neutral * 5.5 + self.negative * 2.0;
        let clamped = raw.clamp(Self::MOOD_MIN, Self::MOOD_MAX);
        (clamped * 10.0).round() / 10.0
    }
}

/// Entry counts per sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
    #[serde(rename = "Negative")]
    pub negative: u32,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }

    /// Most frequent class, or `None` for an empty distribution.
    /// Ties resolve Positive, Neutral, Negative.
    pub fn dominant(&self) -> Option<Sentiment> {
        if self.total() == 0 {
            return None;
        }
        Sentiment::ALL
            .into_iter()
            .fold(None, |best: Option<Sentiment>, s| match best {
                Some(b) if self.count(b) >= self.count(s) => Some(b),
                _ => Some(s),
            })
    }
}

impl FromIterator<Sentiment> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut dist = SentimentDistribution::default();
        for s in iter {
            dist.record(s);
        }
        dist
    }
}
