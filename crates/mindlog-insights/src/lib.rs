//! mindlog-insights
//!
//! The pattern-analysis and recommendation engine. Everything here is
//! pure and synchronous: callers fetch history from storage, pass it in
//! with an explicit "now", and get derived values back. Nothing is cached
//! between calls.

pub mod analytics;
pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod insight;
pub mod notify;
pub mod selector;

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::Serialize;

use mindlog_core::models::assessment::AssessmentResult;
use mindlog_core::models::entry::JournalEntry;
use mindlog_core::models::sentiment::Sentiment;
use mindlog_core::models::strategy::CopingStrategy;

use analyzer::{PatternAnalyzer, UserPatternSnapshot};
use config::AnalysisConfig;
use insight::{Insight, InsightGenerator};
use notify::NotificationGate;
use selector::StrategySelector;

/// Everything derived for one user at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub snapshot: UserPatternSnapshot,
    pub insight: Insight,
    pub strategies: Vec<CopingStrategy>,
    pub should_notify: bool,
}

/// The four core components wired to one configuration.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    pub analyzer: PatternAnalyzer,
    pub generator: InsightGenerator,
    pub selector: StrategySelector,
    pub gate: NotificationGate,
}

impl InsightEngine {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            analyzer: PatternAnalyzer::new(config.patterns.clone()),
            generator: InsightGenerator::new(config.insights.clone()),
            selector: StrategySelector::new(config.strategies.clone()),
            gate: NotificationGate::new(config.notifications.clone()),
        }
    }

    /// Analyze a newest-first history and run every consumer of the
    /// snapshot.
    pub fn evaluate(
        &self,
        entries: &[JournalEntry],
        current_sentiment: Sentiment,
        latest_assessments: &BTreeMap<u32, AssessmentResult>,
        now: Timestamp,
    ) -> Evaluation {
        let snapshot = self.analyzer.analyze(entries, now);
        let insight = self.generator.generate(&snapshot, current_sentiment, entries);
        let strategies = self
            .selector
            .select(&snapshot, current_sentiment, latest_assessments);
        let should_notify = self.gate.should_notify(&snapshot, current_sentiment);

        Evaluation {
            snapshot,
            insight,
            strategies,
            should_notify,
        }
    }
}

/// Sentiment of the newest entry, or Neutral for an empty history.
pub fn current_sentiment(entries: &[JournalEntry]) -> Sentiment {
    entries
        .first()
        .map(|e| e.sentiment)
        .unwrap_or(Sentiment::Neutral)
}
