use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive integer score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub number: u32,
    pub text: String,
    /// Reverse-keyed items are scored as `min + max - value`.
    pub reverse_scored: bool,
    /// Trait or facet the item loads on, for inventories that report
    /// subtotals.
    pub facet: Option<String>,
}

/// A selectable answer shared by every item of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub label: String,
    pub value: u32,
}

/// Maps a total-score range to a severity level.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityThreshold {
    pub range: ScoreRange,
    pub severity_level: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// Outcome of scoring a complete, validated submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredSubmission {
    pub test_id: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub severity_level: String,
    pub description: String,
    pub recommendations: Vec<String>,
    pub has_crisis_indicators: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facet_scores: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerProblem {
    UnknownQuestion,
    Duplicate,
    OutOfRange,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerError {
    pub question_number: u32,
    pub problem: AnswerProblem,
    pub message: String,
}
