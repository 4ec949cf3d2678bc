use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StrategyCategory {
    Depression,
    Anxiety,
    Stress,
    Personality,
    Mindfulness,
    #[serde(rename = "Positive Psychology")]
    PositivePsychology,
    #[serde(rename = "quick_relief")]
    QuickRelief,
    General,
}

impl StrategyCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyCategory::Depression => "Depression",
            StrategyCategory::Anxiety => "Anxiety",
            StrategyCategory::Stress => "Stress",
            StrategyCategory::Personality => "Personality",
            StrategyCategory::Mindfulness => "Mindfulness",
            StrategyCategory::PositivePsychology => "Positive Psychology",
            StrategyCategory::QuickRelief => "quick_relief",
            StrategyCategory::General => "General",
        }
    }
}

impl fmt::Display for StrategyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            StrategyCategory::Depression,
            StrategyCategory::Anxiety,
            StrategyCategory::Stress,
            StrategyCategory::Personality,
            StrategyCategory::Mindfulness,
            StrategyCategory::PositivePsychology,
            StrategyCategory::QuickRelief,
            StrategyCategory::General,
        ]
        .into_iter()
        .find(|c| c.as_str() == s)
        .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// A catalog entry. The catalog is read-only at runtime and
/// `effectiveness_score` (1–10) is author-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CopingStrategy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: StrategyCategory,
    pub duration_minutes: u32,
    pub effectiveness_score: u8,
    pub instructions: String,
}
