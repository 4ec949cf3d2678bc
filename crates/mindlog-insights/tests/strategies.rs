use std::collections::{BTreeMap, HashSet};

use jiff::Timestamp;
use uuid::Uuid;

use mindlog_core::models::assessment::{AssessmentResult, InstrumentKind};
use mindlog_core::models::sentiment::Sentiment::{self, Negative, Neutral, Positive};
use mindlog_core::models::strategy::{CopingStrategy, StrategyCategory};
use mindlog_insights::analyzer::{MoodPattern, Trend, UserPatternSnapshot};
use mindlog_insights::catalog::{all_strategies, get_strategy};
use mindlog_insights::config::StrategyLimits;
use mindlog_insights::selector::{StrategySelector, candidate_pool, rank};

fn assessment(test_id: u32, kind: InstrumentKind, severity: &str) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        test_id,
        kind,
        total_score: 0,
        severity_level: severity.to_string(),
        answers: vec![],
        has_crisis_indicators: false,
        completed_at: Timestamp::UNIX_EPOCH,
    }
}

fn latest(results: Vec<AssessmentResult>) -> BTreeMap<u32, AssessmentResult> {
    results.into_iter().map(|r| (r.test_id, r)).collect()
}

fn ids(strategies: &[CopingStrategy]) -> Vec<&str> {
    strategies.iter().map(|s| s.id.as_str()).collect()
}

fn steady() -> UserPatternSnapshot {
    UserPatternSnapshot {
        total_entries: 10,
        mood_pattern: MoodPattern::Neutral,
        ..UserPatternSnapshot::default()
    }
}

fn everything_triggered() -> (UserPatternSnapshot, BTreeMap<u32, AssessmentResult>) {
    let snapshot = UserPatternSnapshot {
        recent_trend: Trend::Declining,
        mood_pattern: MoodPattern::Concerning,
        ..steady()
    };
    let assessments = latest(vec![
        assessment(1, InstrumentKind::Depression, "severe"),
        assessment(2, InstrumentKind::Anxiety, "severe"),
        assessment(3, InstrumentKind::Personality, "high"),
        assessment(4, InstrumentKind::Stress, "high"),
    ]);
    (snapshot, assessments)
}

#[test]
fn catalog_ids_are_unique_and_scores_in_range() {
    let mut seen = HashSet::new();
    for s in all_strategies() {
        assert!(seen.insert(s.id.clone()), "duplicate id {}", s.id);
        assert!((1..=10).contains(&s.effectiveness_score), "{}", s.id);
        assert!(s.duration_minutes > 0, "{}", s.id);
    }
}

#[test]
fn no_assessments_still_returns_universal_strategy() {
    let result = StrategySelector::default().select(&steady(), Positive, &BTreeMap::new());
    assert_eq!(ids(&result), ["gratitude_three_good_things"]);
    assert_eq!(result[0].category, StrategyCategory::PositivePsychology);
}

#[test]
fn neutral_entry_without_assessments_adds_reflection() {
    let result = StrategySelector::default().select(&steady(), Neutral, &BTreeMap::new());
    assert_eq!(ids(&result), ["gratitude_practice", "gratitude_three_good_things"]);
}

#[test]
fn negative_entry_adds_quick_relief() {
    let result = StrategySelector::default().select(&steady(), Negative, &BTreeMap::new());
    assert_eq!(ids(&result), ["breathing_478", "gratitude_three_good_things"]);
}

#[test]
fn severe_depression_includes_both_depression_strategies() {
    let assessments = latest(vec![assessment(1, InstrumentKind::Depression, "severe")]);
    let result = StrategySelector::default().select(&steady(), Positive, &assessments);

    let ids = ids(&result);
    assert!(ids.contains(&"behavioral_activation"));
    assert!(ids.contains(&"thought_record"));
}

#[test]
fn mild_scores_do_not_trigger_clinical_rules() {
    let assessments = latest(vec![
        assessment(1, InstrumentKind::Depression, "mild"),
        assessment(2, InstrumentKind::Anxiety, "mild"),
        assessment(4, InstrumentKind::Stress, "low"),
    ]);
    let result = StrategySelector::default().select(&steady(), Positive, &assessments);
    assert_eq!(ids(&result), ["gratitude_three_good_things"]);
}

#[test]
fn moderately_severe_only_counts_for_depression() {
    let assessments = latest(vec![
        assessment(1, InstrumentKind::Depression, "moderately_severe"),
        assessment(2, InstrumentKind::Anxiety, "moderately_severe"),
    ]);
    let result = StrategySelector::default().select(&steady(), Positive, &assessments);
    let categories: Vec<StrategyCategory> = result.iter().map(|s| s.category).collect();
    assert!(categories.contains(&StrategyCategory::Depression));
    assert!(!categories.contains(&StrategyCategory::Anxiety));
}

#[test]
fn personality_result_of_any_level_triggers() {
    let assessments = latest(vec![assessment(3, InstrumentKind::Personality, "low")]);
    let result = StrategySelector::default().select(&steady(), Positive, &assessments);
    assert_eq!(ids(&result), ["values_clarification", "gratitude_three_good_things"]);
}

#[test]
fn concerning_mood_or_decline_adds_grounding() {
    let concerning = UserPatternSnapshot {
        mood_pattern: MoodPattern::Concerning,
        ..steady()
    };
    let declining = UserPatternSnapshot {
        recent_trend: Trend::Declining,
        ..steady()
    };
    for snapshot in [concerning, declining] {
        let result = StrategySelector::default().select(&snapshot, Positive, &BTreeMap::new());
        assert_eq!(ids(&result)[0], "grounding_54321");
    }
}

#[test]
fn full_pool_is_capped_and_diverse() {
    let (snapshot, assessments) = everything_triggered();
    let pool = candidate_pool(&snapshot, Negative, &assessments);
    assert_eq!(pool.len(), 10);

    let result = StrategySelector::default().select(&snapshot, Negative, &assessments);
    assert_eq!(result.len(), 8);

    // first pass: one per category, in first-seen order
    let first_pass: Vec<StrategyCategory> = result[..7].iter().map(|s| s.category).collect();
    assert_eq!(
        first_pass,
        [
            StrategyCategory::Depression,
            StrategyCategory::Anxiety,
            StrategyCategory::Stress,
            StrategyCategory::Personality,
            StrategyCategory::Mindfulness,
            StrategyCategory::QuickRelief,
            StrategyCategory::PositivePsychology,
        ]
    );
    // equal scores resolve by catalog order, the higher score wins within Stress
    assert_eq!(result[0].id, "behavioral_activation");
    assert_eq!(result[2].id, "box_breathing");
    // fill pass takes the best leftover
    assert_eq!(result[7].id, "thought_record");
}

#[test]
fn limit_applies_to_first_pass_too() {
    let (snapshot, assessments) = everything_triggered();
    let selector = StrategySelector::new(StrategyLimits { max_strategies: 3 });
    let result = selector.select(&snapshot, Negative, &assessments);
    assert_eq!(
        ids(&result),
        ["behavioral_activation", "progressive_muscle_relaxation", "box_breathing"]
    );
}

#[test]
fn fill_pass_orders_leftovers_by_effectiveness() {
    let pool: Vec<&CopingStrategy> = ["worry_time", "progressive_muscle_relaxation", "time_management", "box_breathing"]
        .iter()
        .filter_map(|id| get_strategy(id))
        .collect();

    let result = rank(pool, 8);
    assert_eq!(
        ids(&result),
        ["progressive_muscle_relaxation", "box_breathing", "time_management", "worry_time"]
    );
}

#[test]
fn fill_pass_may_repeat_categories() {
    let pool: Vec<&CopingStrategy> = ["behavioral_activation", "thought_record"]
        .iter()
        .filter_map(|id| get_strategy(id))
        .collect();
    let result = rank(pool, 8);
    assert_eq!(ids(&result), ["behavioral_activation", "thought_record"]);
}

#[test]
fn every_rule_combination_is_bounded_and_unique() {
    let severities = ["minimal", "moderate", "severe", "high"];
    let trends = [Trend::Stable, Trend::Improving, Trend::Declining];
    let moods = [MoodPattern::InsufficientData, MoodPattern::Concerning, MoodPattern::Positive];
    let sentiments: [Sentiment; 3] = Sentiment::ALL;

    let selector = StrategySelector::default();
    for severity in severities {
        for with_personality in [false, true] {
            let mut results = vec![
                assessment(1, InstrumentKind::Depression, severity),
                assessment(2, InstrumentKind::Anxiety, severity),
                assessment(4, InstrumentKind::Stress, severity),
            ];
            if with_personality {
                results.push(assessment(3, InstrumentKind::Personality, severity));
            }
            let assessments = latest(results);

            for trend in trends {
                for mood in moods {
                    for current in sentiments {
                        let snapshot = UserPatternSnapshot {
                            recent_trend: trend,
                            mood_pattern: mood,
                            ..steady()
                        };
                        let result = selector.select(&snapshot, current, &assessments);
                        assert!(!result.is_empty());
                        assert!(result.len() <= 8);
                        let unique: HashSet<&str> = result.iter().map(|s| s.id.as_str()).collect();
                        assert_eq!(unique.len(), result.len());
                    }
                }
            }
        }
    }
}

#[test]
fn select_is_idempotent() {
    let (snapshot, assessments) = everything_triggered();
    let selector = StrategySelector::default();
    assert_eq!(
        selector.select(&snapshot, Neutral, &assessments),
        selector.select(&snapshot, Neutral, &assessments)
    );
}
