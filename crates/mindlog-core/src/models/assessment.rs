use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// What a questionnaire measures. Strategy rules key off this, not the
/// numeric test id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    Depression,
    Anxiety,
    Personality,
    Stress,
}

impl InstrumentKind {
    /// Clinical screens score lower-is-better; personality inventories don't.
    pub fn is_clinical(self) -> bool {
        !matches!(self, InstrumentKind::Personality)
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstrumentKind::Depression => "depression",
            InstrumentKind::Anxiety => "anxiety",
            InstrumentKind::Personality => "personality",
            InstrumentKind::Stress => "stress",
        };
        f.write_str(s)
    }
}

/// One answered questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_number: u32,
    pub value: u32,
}

/// A completed questionnaire. Immutable once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub user_id: String,
    pub test_id: u32,
    pub kind: InstrumentKind,
    pub total_score: u32,
    pub severity_level: String,
    pub answers: Vec<Answer>,
    pub has_crisis_indicators: bool,
    pub completed_at: jiff::Timestamp,
}

/// Most recent result per `test_id`. On equal `completed_at` the first
/// result encountered wins.
pub fn latest_per_test(results: &[AssessmentResult]) -> BTreeMap<u32, AssessmentResult> {
    let mut latest: BTreeMap<u32, AssessmentResult> = BTreeMap::new();
    for result in results {
        match latest.get(&result.test_id) {
            Some(existing) if existing.completed_at >= result.completed_at => {}
            _ => {
                latest.insert(result.test_id, result.clone());
            }
        }
    }
    latest
}

/// Sort results newest-first by `completed_at`.
pub fn sort_newest_first(results: &mut [AssessmentResult]) {
    results.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}
