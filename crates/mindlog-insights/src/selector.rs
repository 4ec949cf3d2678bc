//! Ranked, deduplicated, category-diverse coping-strategy selection.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use mindlog_core::models::assessment::{AssessmentResult, InstrumentKind};
use mindlog_core::models::sentiment::Sentiment;
use mindlog_core::models::strategy::{CopingStrategy, StrategyCategory};

use crate::analyzer::{MoodPattern, Trend, UserPatternSnapshot};
use crate::catalog::{catalog_position, top_in_category};
use crate::config::StrategyLimits;

const DEPRESSION_SEVERITIES: &[&str] = &["moderate", "moderately_severe", "severe"];
const ANXIETY_SEVERITIES: &[&str] = &["moderate", "severe"];
const STRESS_SEVERITIES: &[&str] = &["moderate", "high"];

#[derive(Debug, Clone, Default)]
pub struct StrategySelector {
    limits: StrategyLimits,
}

impl StrategySelector {
    pub fn new(limits: StrategyLimits) -> Self {
        Self { limits }
    }

    /// Select up to `max_strategies` strategies. `latest_assessments` holds
    /// the newest result per test id.
    pub fn select(
        &self,
        snapshot: &UserPatternSnapshot,
        current_sentiment: Sentiment,
        latest_assessments: &BTreeMap<u32, AssessmentResult>,
    ) -> Vec<CopingStrategy> {
        let pool = candidate_pool(snapshot, current_sentiment, latest_assessments);
        rank(pool, self.limits.max_strategies)
    }
}

/// Evaluate every trigger rule in a fixed order and concatenate what fires.
/// Duplicate ids are dropped, first occurrence wins.
pub fn candidate_pool(
    snapshot: &UserPatternSnapshot,
    current_sentiment: Sentiment,
    latest_assessments: &BTreeMap<u32, AssessmentResult>,
) -> Vec<&'static CopingStrategy> {
    let has_kind_at = |kind: InstrumentKind, severities: &[&str]| {
        latest_assessments
            .values()
            .any(|r| r.kind == kind && severities.contains(&r.severity_level.as_str()))
    };

    let mut pool = Vec::new();

    if has_kind_at(InstrumentKind::Depression, DEPRESSION_SEVERITIES) {
        pool.extend(top_in_category(StrategyCategory::Depression, 2));
    }
    if has_kind_at(InstrumentKind::Anxiety, ANXIETY_SEVERITIES) {
        pool.extend(top_in_category(StrategyCategory::Anxiety, 2));
    }
    if has_kind_at(InstrumentKind::Stress, STRESS_SEVERITIES) {
        pool.extend(top_in_category(StrategyCategory::Stress, 2));
    }
    if latest_assessments
        .values()
        .any(|r| r.kind == InstrumentKind::Personality)
    {
        pool.extend(top_in_category(StrategyCategory::Personality, 1));
    }
    if snapshot.recent_trend == Trend::Declining
        || snapshot.mood_pattern == MoodPattern::Concerning
    {
        pool.extend(top_in_category(StrategyCategory::Mindfulness, 1));
    }
    if current_sentiment == Sentiment::Negative {
        pool.extend(top_in_category(StrategyCategory::QuickRelief, 1));
    }
    if current_sentiment == Sentiment::Neutral && latest_assessments.is_empty() {
        pool.extend(top_in_category(StrategyCategory::General, 1));
    }
    pool.extend(top_in_category(StrategyCategory::PositivePsychology, 1));

    let mut seen = HashSet::new();
    pool.retain(|s| seen.insert(s.id.clone()));
    pool
}

/// One strategy per category in first-seen category order, then top up by
/// effectiveness from what is left.
pub fn rank(pool: Vec<&CopingStrategy>, limit: usize) -> Vec<CopingStrategy> {
    let mut categories: Vec<StrategyCategory> = Vec::new();
    for strategy in &pool {
        if !categories.contains(&strategy.category) {
            categories.push(strategy.category);
        }
    }

    let mut selected: Vec<&CopingStrategy> = Vec::new();
    for category in categories {
        if selected.len() >= limit {
            break;
        }
        let best = pool
            .iter()
            .copied()
            .filter(|s| s.category == category)
            .min_by_key(|s| {
                (
                    Reverse(s.effectiveness_score),
                    catalog_position(&s.id).unwrap_or(usize::MAX),
                )
            });
        if let Some(best) = best {
            selected.push(best);
        }
    }

    let taken: HashSet<&str> = selected.iter().map(|s| s.id.as_str()).collect();
    let mut remaining: Vec<&CopingStrategy> = pool
        .iter()
        .copied()
        .filter(|s| !taken.contains(s.id.as_str()))
        .collect();
    remaining.sort_by_key(|s| Reverse(s.effectiveness_score));

    let room = limit.saturating_sub(selected.len());
    selected.extend(remaining.into_iter().take(room));

    selected.into_iter().cloned().collect()
}
