mod common;

use jiff::Timestamp;

use mindlog_core::models::sentiment::Sentiment::{Negative, Neutral, Positive};
use mindlog_insights::analytics::{
    JournalAnalytics, TimeOfDay, common_themes, streak, time_of_day_patterns, weekly_mood_trend,
};
use mindlog_insights::analyzer::{PatternAnalyzer, Trend};
use mindlog_insights::feedback::{RecommendationKind, emotion_keywords, entry_feedback, recommend};

use common::{entry_at, hours_ago, now};

fn at(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn streak_counts_consecutive_days() {
    let entries = vec![
        entry_at(Positive, "today", hours_ago(1)),
        entry_at(Positive, "yesterday", hours_ago(24)),
        entry_at(Neutral, "also yesterday", hours_ago(26)),
        entry_at(Negative, "two days ago", hours_ago(48)),
        entry_at(Negative, "after a gap", hours_ago(24 * 5)),
    ];
    assert_eq!(streak(&entries, now()), 3);
}

#[test]
fn streak_survives_an_empty_today() {
    let entries = vec![
        entry_at(Positive, "yesterday", hours_ago(24)),
        entry_at(Positive, "two days ago", hours_ago(48)),
    ];
    assert_eq!(streak(&entries, now()), 2);
}

#[test]
fn streak_breaks_on_empty_yesterday() {
    let entries = vec![entry_at(Positive, "two days ago", hours_ago(48))];
    assert_eq!(streak(&entries, now()), 0);
    assert_eq!(streak(&[], now()), 0);
}

#[test]
fn streak_is_capped() {
    let entries: Vec<_> = (0..45)
        .map(|d| entry_at(Neutral, "daily", hours_ago(24 * d)))
        .collect();
    assert_eq!(streak(&entries, now()), 30);
}

#[test]
fn weekly_trend_is_oldest_first_with_gaps() {
    let entries = vec![
        entry_at(Positive, "a", at("2026-03-10T09:00:00Z")),
        entry_at(Negative, "b", at("2026-03-10T08:00:00Z")),
        entry_at(Neutral, "c", at("2026-03-08T20:00:00Z")),
    ];
    let trend = weekly_mood_trend(&entries, now(), 7);

    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].date.to_string(), "2026-03-04");
    assert_eq!(trend[6].date.to_string(), "2026-03-10");
    // (8.9 + 2.9) / 2
    assert_eq!(trend[6].average_mood, Some(5.9));
    assert_eq!(trend[6].entry_count, 2);
    assert_eq!(trend[4].average_mood, Some(5.6));
    assert_eq!(trend[5].average_mood, None);
    assert_eq!(trend[5].entry_count, 0);
}

#[test]
fn time_of_day_buckets_by_utc_hour() {
    assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);

    let entries = vec![
        entry_at(Positive, "a", at("2026-03-10T09:00:00Z")),
        entry_at(Negative, "b", at("2026-03-09T10:30:00Z")),
        entry_at(Neutral, "c", at("2026-03-09T13:00:00Z")),
    ];
    let patterns = time_of_day_patterns(&entries);

    let morning = patterns.get(TimeOfDay::Morning);
    assert_eq!(morning.entry_count, 2);
    assert_eq!(morning.average_mood, Some(5.9));
    assert_eq!(morning.sentiment_counts.positive, 1);
    assert_eq!(morning.sentiment_counts.negative, 1);
    assert_eq!(patterns.afternoon.entry_count, 1);
    assert_eq!(patterns.evening.entry_count, 0);
    assert_eq!(patterns.evening.average_mood, None);
}

#[test]
fn themes_count_whole_keywords() {
    let entries = vec![
        entry_at(Negative, "Work meeting ran late, then another meeting.", hours_ago(1)),
        entry_at(Neutral, "Called my family; so tired.", hours_ago(2)),
        entry_at(Neutral, "Homework is not work-related", hours_ago(3)),
    ];
    let themes = common_themes(&entries);

    assert_eq!(themes[0].theme, "work");
    assert_eq!(themes[0].mentions, 3);
    assert!(themes.iter().any(|t| t.theme == "relationships" && t.mentions == 1));
    assert!(themes.iter().any(|t| t.theme == "health" && t.mentions == 1));
}

#[test]
fn themes_omit_unmentioned_groups() {
    let entries = vec![entry_at(Positive, "A quiet walk by the sea", hours_ago(1))];
    assert!(common_themes(&entries).is_empty());
}

#[test]
fn overview_combines_every_view() {
    let entries = vec![
        entry_at(Negative, "deadline stress at work", hours_ago(1)),
        entry_at(Positive, "good day", hours_ago(24)),
        entry_at(Positive, "good day", hours_ago(48)),
        entry_at(Negative, "rough", hours_ago(24 * 10)),
    ];
    let analytics = JournalAnalytics::from_entries(&PatternAnalyzer::default(), &entries, now());

    assert_eq!(analytics.total_entries, 4);
    assert_eq!(analytics.entries_this_week, 3);
    assert_eq!(analytics.current_streak, 3);
    assert_eq!(analytics.dominant_sentiment, Some(Positive));
    assert_eq!(analytics.sentiment_percentages.positive, 50.0);
    assert_eq!(analytics.sentiment_percentages.negative, 50.0);
    assert_eq!(analytics.sentiment_percentages.neutral, 0.0);
    assert_eq!(analytics.recent_trend, Trend::Improving);
    assert_eq!(analytics.weekly_mood.len(), 7);
    assert_eq!(analytics.common_themes[0].theme, "work");
    // (2.9 + 8.9 + 8.9 + 2.9) / 4
    assert_eq!(analytics.average_mood, 5.9);
}

#[test]
fn overview_of_empty_history() {
    let analytics = JournalAnalytics::from_entries(&PatternAnalyzer::default(), &[], now());
    assert_eq!(analytics.total_entries, 0);
    assert_eq!(analytics.average_mood, 0.0);
    assert_eq!(analytics.dominant_sentiment, None);
    assert_eq!(analytics.sentiment_percentages.positive, 0.0);
    assert_eq!(analytics.current_streak, 0);
}

#[test]
fn keywords_are_found_once_in_list_order() {
    let found = emotion_keywords("Tired but GRATEFUL. Good, good progress; still stressed.");
    assert_eq!(found.positive, ["grateful", "good"]);
    assert_eq!(found.negative, ["stressed", "tired"]);
}

#[test]
fn recommendation_follows_label_and_mood() {
    assert_eq!(recommend(Negative, 8.0).kind, RecommendationKind::CopingStrategy);
    assert_eq!(recommend(Neutral, 3.5).kind, RecommendationKind::CopingStrategy);
    assert_eq!(recommend(Positive, 8.9).kind, RecommendationKind::PositiveReinforcement);
    assert_eq!(recommend(Positive, 7.0).kind, RecommendationKind::GeneralWellness);
    assert_eq!(recommend(Neutral, 5.6).kind, RecommendationKind::GeneralWellness);
}

#[test]
fn entry_feedback_uses_entry_fields() {
    let entry = entry_at(Positive, "An amazing, happy afternoon", hours_ago(1));
    let feedback = entry_feedback(&entry);
    assert_eq!(feedback.keywords.positive, ["happy", "amazing"]);
    assert!(feedback.keywords.negative.is_empty());
    assert_eq!(feedback.recommendation.kind, RecommendationKind::PositiveReinforcement);
}
