mod common;

use mindlog_core::models::sentiment::Sentiment::{self, Negative, Neutral, Positive};
use mindlog_insights::analyzer::{MoodPattern, PatternAnalyzer, Trend, UserPatternSnapshot};
use mindlog_insights::config::PatternThresholds;

use common::{entry_at, history, hours_ago, now};

fn analyze(sentiments: &[Sentiment]) -> UserPatternSnapshot {
    PatternAnalyzer::default().analyze(&history(sentiments), now())
}

#[test]
fn empty_history_is_zero_snapshot() {
    let snapshot = PatternAnalyzer::default().analyze(&[], now());

    assert_eq!(snapshot, UserPatternSnapshot::default());
    assert_eq!(snapshot.total_entries, 0);
    assert_eq!(snapshot.negative_ratio, 0.0);
    assert_eq!(snapshot.consistency_score, 0);
    assert_eq!(snapshot.recent_trend, Trend::Stable);
    assert_eq!(snapshot.mood_pattern, MoodPattern::InsufficientData);
}

#[test]
fn fewer_than_four_entries_is_stable() {
    assert_eq!(analyze(&[Positive]).recent_trend, Trend::Stable);
    assert_eq!(analyze(&[Positive, Positive, Negative]).recent_trend, Trend::Stable);
    assert_eq!(analyze(&[Negative, Negative, Positive]).recent_trend, Trend::Stable);
}

#[test]
fn positive_after_negative_is_improving() {
    let snapshot = analyze(&[Positive, Positive, Positive, Negative, Negative, Negative]);
    assert_eq!(snapshot.recent_trend, Trend::Improving);
}

#[test]
fn negative_after_positive_is_declining() {
    let snapshot = analyze(&[Negative, Negative, Negative, Positive, Positive, Positive]);
    assert_eq!(snapshot.recent_trend, Trend::Declining);
}

#[test]
fn short_previous_group_uses_what_exists() {
    // previous group is the single Negative entry
    let snapshot = analyze(&[Positive, Positive, Positive, Negative]);
    assert_eq!(snapshot.recent_trend, Trend::Improving);

    let snapshot = analyze(&[Neutral, Neutral, Neutral, Neutral, Neutral]);
    assert_eq!(snapshot.recent_trend, Trend::Stable);
}

#[test]
fn only_first_six_entries_drive_the_trend() {
    let snapshot = analyze(&[
        Neutral, Neutral, Neutral, Neutral, Neutral, Neutral, Negative, Negative, Negative,
    ]);
    assert_eq!(snapshot.recent_trend, Trend::Stable);
}

#[test]
fn band_edges() {
    // recent mean 2.0, previous mean 1.67: a 0.33 difference clears the band
    let snapshot = analyze(&[Neutral, Neutral, Neutral, Neutral, Negative, Neutral]);
    assert_eq!(snapshot.recent_trend, Trend::Improving);

    // recent mean 2.0 vs previous mean 2.0
    let snapshot = analyze(&[Positive, Negative, Neutral, Neutral, Neutral, Neutral]);
    assert_eq!(snapshot.recent_trend, Trend::Stable);
}

#[test]
fn trend_band_is_configurable() {
    let analyzer = PatternAnalyzer::new(PatternThresholds {
        trend_band: 0.5,
        ..PatternThresholds::default()
    });
    let entries = history(&[Neutral, Neutral, Neutral, Neutral, Negative, Neutral]);
    assert_eq!(analyzer.analyze(&entries, now()).recent_trend, Trend::Stable);
}

#[test]
fn ratios_use_different_windows() {
    let entries = vec![
        entry_at(Positive, "fine", hours_ago(1)),
        entry_at(Positive, "fine", hours_ago(2)),
        entry_at(Negative, "rough", hours_ago(24 * 8)),
        entry_at(Negative, "rough", hours_ago(24 * 9)),
    ];
    let snapshot = PatternAnalyzer::default().analyze(&entries, now());

    assert_eq!(snapshot.total_entries, 4);
    assert_eq!(snapshot.negative_ratio, 0.5);
    assert_eq!(snapshot.recent_negative_ratio, 0.0);
    assert_eq!(snapshot.consistency_score, 2);
    assert_eq!(snapshot.preferred_entry_times, vec![14, 13]);
    assert_eq!(snapshot.sentiment_distribution.positive, 2);
    assert_eq!(snapshot.sentiment_distribution.negative, 2);
}

#[test]
fn window_boundary_is_inclusive() {
    let entries = vec![
        entry_at(Negative, "edge", hours_ago(24 * 7)),
        entry_at(Negative, "outside", hours_ago(24 * 7 + 1)),
    ];
    let snapshot = PatternAnalyzer::default().analyze(&entries, now());
    assert_eq!(snapshot.consistency_score, 1);
    assert_eq!(snapshot.recent_negative_ratio, 1.0);
}

#[test]
fn no_recent_entries_gives_zero_recent_ratio() {
    let entries = vec![entry_at(Negative, "old", hours_ago(24 * 30))];
    let snapshot = PatternAnalyzer::default().analyze(&entries, now());
    assert_eq!(snapshot.consistency_score, 0);
    assert_eq!(snapshot.recent_negative_ratio, 0.0);
    assert_eq!(snapshot.negative_ratio, 1.0);
    assert!(snapshot.preferred_entry_times.is_empty());
}

#[test]
fn average_confidence_over_all_entries() {
    let mut entries = history(&[Positive, Negative]);
    entries[1].confidence = 0.4;
    let snapshot = PatternAnalyzer::default().analyze(&entries, now());
    assert!((snapshot.average_confidence - 0.6).abs() < 1e-9);
}

#[test]
fn frequent_words_counts_long_tokens_across_history() {
    let entries = vec![
        entry_at(Neutral, "Work was busy and the deadline moved", hours_ago(1)),
        entry_at(Negative, "work work and more WORK", hours_ago(2)),
        entry_at(Neutral, "deadline again", hours_ago(24 * 20)),
    ];
    let words = PatternAnalyzer::default().frequent_words(&entries);

    assert_eq!(words[0].word, "work");
    assert_eq!(words[0].count, 4);
    assert_eq!(words[1].word, "deadline");
    assert_eq!(words[1].count, 2);
    assert!(words.iter().all(|w| w.word.chars().count() > 3));
    assert!(!words.iter().any(|w| w.word == "the" || w.word == "and"));
}

#[test]
fn frequent_words_ties_keep_first_seen_order_and_limit() {
    let text = "elk alpha bravo yak charlie delta echoes foxtrot hotel india juliet kilos limas";
    let entries = vec![entry_at(Neutral, text, hours_ago(1))];
    let words = PatternAnalyzer::default().frequent_words(&entries);

    assert_eq!(words.len(), 10);
    assert_eq!(words[0].word, "alpha");
    assert_eq!(words[1].word, "bravo");
    assert!(!words.iter().any(|w| w.word == "elk" || w.word == "yak"));
    assert!(!words.iter().any(|w| w.word == "limas"));
}

#[test]
fn mood_pattern_reads_newest_entries() {
    assert_eq!(analyze(&[Positive]).mood_pattern, MoodPattern::InsufficientData);
    assert_eq!(analyze(&[Positive, Positive]).mood_pattern, MoodPattern::Positive);
    assert_eq!(analyze(&[Neutral, Neutral, Neutral]).mood_pattern, MoodPattern::Neutral);
    assert_eq!(analyze(&[Negative, Negative]).mood_pattern, MoodPattern::Concerning);

    // eighth entry onward is outside the window
    let mut sentiments = vec![Negative; 7];
    sentiments.extend([Positive; 5]);
    assert_eq!(analyze(&sentiments).mood_pattern, MoodPattern::Concerning);
}

#[test]
fn summary_exposes_client_fields() {
    let snapshot = analyze(&[Negative, Negative, Negative, Positive, Positive, Positive]);
    let summary = snapshot.summary();
    assert_eq!(summary.total_entries, 6);
    assert_eq!(summary.recent_trend, Trend::Declining);
    assert_eq!(summary.consistency_score, 6);
    assert_eq!(summary.sentiment_distribution.positive, 3);
}

#[test]
fn analyze_is_idempotent() {
    let entries = history(&[Negative, Positive, Neutral, Negative, Negative, Positive, Neutral]);
    let analyzer = PatternAnalyzer::default();
    assert_eq!(analyzer.analyze(&entries, now()), analyzer.analyze(&entries, now()));
}

#[test]
fn snapshot_serializes_trend_in_snake_case() {
    let json = serde_json::to_value(analyze(&[Positive, Positive])).unwrap();
    assert_eq!(json["recent_trend"], "stable");
    assert_eq!(json["mood_pattern"], "positive");
    assert_eq!(json["sentiment_distribution"]["Positive"], 2);
}

#[test]
fn huge_window_saturates_instead_of_overflowing() {
    let analyzer = PatternAnalyzer::new(PatternThresholds {
        recent_window_days: i64::MAX,
        ..PatternThresholds::default()
    });
    let entries = vec![
        entry_at(Positive, "today", hours_ago(1)),
        entry_at(Negative, "last year", hours_ago(24 * 400)),
    ];
    let snapshot = analyzer.analyze(&entries, now());
    assert_eq!(snapshot.consistency_score, 2);
}
