//! Per-instrument summaries over a user's result history.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlog_core::models::assessment::{AssessmentResult, InstrumentKind};

use crate::get_instrument_by_test_id;

/// Direction of the latest score relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreTrend {
    Improving,
    Increasing,
    Stable,
}

/// For clinical screens a lower score is better. Personality inventories
/// have no better direction and always report stable.
pub fn score_trend(kind: InstrumentKind, latest: u32, previous: u32) -> ScoreTrend {
    if !kind.is_clinical() {
        return ScoreTrend::Stable;
    }
    match latest.cmp(&previous) {
        std::cmp::Ordering::Less => ScoreTrend::Improving,
        std::cmp::Ordering::Greater => ScoreTrend::Increasing,
        std::cmp::Ordering::Equal => ScoreTrend::Stable,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentHistory {
    pub test_id: u32,
    pub test_name: String,
    pub kind: InstrumentKind,
    pub latest_score: u32,
    pub max_score: u32,
    pub severity_level: String,
    pub last_taken: jiff::Timestamp,
    pub history_count: u32,
    /// `None` until the instrument has been taken twice.
    pub trend: Option<ScoreTrend>,
}

/// Summarize a newest-first result history, one row per instrument, ordered
/// by test id. Results for unknown test ids are skipped.
pub fn summarize(results: &[AssessmentResult]) -> Vec<InstrumentHistory> {
    let mut test_ids: Vec<u32> = results.iter().map(|r| r.test_id).collect();
    test_ids.sort_unstable();
    test_ids.dedup();

    test_ids
        .into_iter()
        .filter_map(|test_id| {
            let instrument = get_instrument_by_test_id(test_id)?;
            let mut history: Vec<&AssessmentResult> =
                results.iter().filter(|r| r.test_id == test_id).collect();
            history.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

            let latest = history.first()?;
            let trend = history
                .get(1)
                .map(|previous| score_trend(latest.kind, latest.total_score, previous.total_score));

            Some(InstrumentHistory {
                test_id,
                test_name: instrument.name().to_string(),
                kind: instrument.kind(),
                latest_score: latest.total_score,
                max_score: instrument.max_score(),
                severity_level: latest.severity_level.clone(),
                last_taken: latest.completed_at,
                history_count: history.len() as u32,
                trend,
            })
        })
        .collect()
}
