//! Tunable thresholds for the analysis engine.
//!
//! Every threshold has a named default constant; `AnalysisConfig::default()`
//! reproduces them exactly. Operators can override any subset from a JSON
//! file, which is migrated to the current schema before deserializing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::InsightsError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const RECENT_WINDOW_DAYS: i64 = 7;
pub const TREND_WINDOW: usize = 3;
pub const TREND_BAND: f64 = 0.3;
pub const MIN_TREND_ENTRIES: usize = 4;
/// Tokens must be strictly longer than this to count as frequent words.
pub const WORD_MIN_EXCLUSIVE_LEN: usize = 3;
pub const FREQUENT_WORDS_LIMIT: usize = 10;
pub const MOOD_WINDOW: usize = 7;
pub const MOOD_MIN_ENTRIES: usize = 2;
pub const MOOD_POSITIVE_MIN: f64 = 7.0;
pub const MOOD_CONCERNING_MAX: f64 = 4.0;

pub const PROFILE_MIN_ENTRIES: u32 = 3;
pub const CONSISTENCY_PRAISE_MIN: u32 = 5;
pub const INTERVENTION_NEGATIVE_RATIO: f64 = 0.6;

pub const EARLY_USER_MAX_ENTRIES: u32 = 3;
pub const NOTIFY_RECENT_NEGATIVE_RATIO: f64 = 0.7;
pub const NOTIFY_NEGATIVE_RATIO: f64 = 0.8;
pub const NOTIFY_HIGH_CONSISTENCY: u32 = 5;
pub const NOTIFY_POSITIVE_AGAINST_RATIO: f64 = 0.5;
pub const NOTIFY_MIN_CONSISTENCY: u32 = 3;

pub const MAX_STRATEGIES: usize = 8;

/// Accepted values for `patterns.recent_window_days`: up to ten years.
pub const RECENT_WINDOW_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=3650;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AnalysisConfig {
    /// Schema version. Missing or 0 = pre-versioned flat file.
    pub config_version: u32,
    pub patterns: PatternThresholds,
    pub insights: InsightThresholds,
    pub notifications: NotificationThresholds,
    pub strategies: StrategyLimits,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            patterns: PatternThresholds::default(),
            insights: InsightThresholds::default(),
            notifications: NotificationThresholds::default(),
            strategies: StrategyLimits::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatternThresholds {
    /// Trailing window, in days, for the "recent" statistics.
    pub recent_window_days: i64,
    /// Entries per group in the recent-vs-previous trend comparison.
    pub trend_window: usize,
    /// Mean difference (on the 1–3 sentiment scale) that counts as a trend.
    pub trend_band: f64,
    pub min_trend_entries: usize,
    pub word_min_exclusive_len: usize,
    pub frequent_words_limit: usize,
    /// Newest entries averaged for the mood pattern.
    pub mood_window: usize,
    pub mood_min_entries: usize,
    pub mood_positive_min: f64,
    pub mood_concerning_max: f64,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            recent_window_days: RECENT_WINDOW_DAYS,
            trend_window: TREND_WINDOW,
            trend_band: TREND_BAND,
            min_trend_entries: MIN_TREND_ENTRIES,
            word_min_exclusive_len: WORD_MIN_EXCLUSIVE_LEN,
            frequent_words_limit: FREQUENT_WORDS_LIMIT,
            mood_window: MOOD_WINDOW,
            mood_min_entries: MOOD_MIN_ENTRIES,
            mood_positive_min: MOOD_POSITIVE_MIN,
            mood_concerning_max: MOOD_CONCERNING_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InsightThresholds {
    /// Below this many entries the profile is still being built.
    pub profile_min_entries: u32,
    pub consistency_praise_min: u32,
    /// Strictly above this all-time negative ratio, intervene.
    pub intervention_negative_ratio: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            profile_min_entries: PROFILE_MIN_ENTRIES,
            consistency_praise_min: CONSISTENCY_PRAISE_MIN,
            intervention_negative_ratio: INTERVENTION_NEGATIVE_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NotificationThresholds {
    pub early_user_max_entries: u32,
    pub recent_negative_ratio: f64,
    pub negative_ratio: f64,
    pub high_consistency: u32,
    /// A positive entry against an all-time negative ratio above this.
    pub positive_against_ratio: f64,
    pub min_consistency: u32,
}

impl Default for NotificationThresholds {
    fn default() -> Self {
        Self {
            early_user_max_entries: EARLY_USER_MAX_ENTRIES,
            recent_negative_ratio: NOTIFY_RECENT_NEGATIVE_RATIO,
            negative_ratio: NOTIFY_NEGATIVE_RATIO,
            high_consistency: NOTIFY_HIGH_CONSISTENCY,
            positive_against_ratio: NOTIFY_POSITIVE_AGAINST_RATIO,
            min_consistency: NOTIFY_MIN_CONSISTENCY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StrategyLimits {
    pub max_strategies: usize,
}

impl Default for StrategyLimits {
    fn default() -> Self {
        Self {
            max_strategies: MAX_STRATEGIES,
        }
    }
}

impl AnalysisConfig {
    /// Parse a config document, running migrations first. Missing fields
    /// fall back to their defaults.
    pub fn from_json(contents: &str) -> Result<Self, InsightsError> {
        let json: Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let config: Self = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), InsightsError> {
        let invalid = |msg: String| Err(InsightsError::InvalidConfig(msg));
        let p = &self.patterns;

        if !RECENT_WINDOW_DAYS_RANGE.contains(&p.recent_window_days) {
            return invalid(format!(
                "patterns.recent_window_days must be in {}..={}, got {}",
                RECENT_WINDOW_DAYS_RANGE.start(),
                RECENT_WINDOW_DAYS_RANGE.end(),
                p.recent_window_days
            ));
        }
        if p.trend_window == 0 {
            return invalid("patterns.trend_window must be at least 1".to_string());
        }
        if !(p.trend_band.is_finite() && p.trend_band >= 0.0) {
            return invalid(format!(
                "patterns.trend_band must be a non-negative number, got {}",
                p.trend_band
            ));
        }
        if self.strategies.max_strategies == 0 {
            return invalid("strategies.max_strategies must be at least 1".to_string());
        }
        Ok(())
    }

    /// Serialize with the current version stamped, regardless of what was
    /// loaded.
    pub fn to_json(&self) -> Result<String, InsightsError> {
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        Ok(serde_json::to_string_pretty(&stamped)?)
    }
}

/// Flat keys used before sections were introduced, with their new location.
const V0_KEYS: [(&str, &str, &str); 5] = [
    ("recent_days", "patterns", "recent_window_days"),
    ("trend_threshold", "patterns", "trend_band"),
    ("consistency_threshold", "insights", "consistency_praise_min"),
    ("negative_threshold", "insights", "intervention_negative_ratio"),
    ("max_strategies", "strategies", "max_strategies"),
];

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: Value, from_version: u32) -> Result<Value, InsightsError> {
    if from_version > CURRENT_VERSION {
        return Err(InsightsError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: move flat keys into their sections
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(InsightsError::NotAnObject)?;
        for (legacy, section, key) in V0_KEYS {
            if let Some(value) = obj.remove(legacy) {
                let target = obj
                    .entry(section)
                    .or_insert_with(|| Value::Object(Default::default()));
                if let Some(target) = target.as_object_mut() {
                    target.entry(key).or_insert(value);
                }
            }
        }
        obj.insert("config_version".to_string(), Value::Number(1.into()));
        tracing::info!("migrated analysis config v0 → v1 (sectioned thresholds)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}
