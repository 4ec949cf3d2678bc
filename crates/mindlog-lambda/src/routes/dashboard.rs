use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::Serialize;

use mindlog_core::models::sentiment::Sentiment;
use mindlog_insights::analytics::JournalAnalytics;
use mindlog_insights::analyzer::{MoodPattern, Trend};
use mindlog_insights::insight::Insight;
use mindlog_instruments::history::{InstrumentHistory, summarize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::History;
use crate::state::AppContext;

#[derive(Serialize)]
pub struct DashboardStats {
    total_entries: u32,
    entries_this_week: u32,
    current_streak: u32,
    average_mood: f64,
    dominant_sentiment: Option<Sentiment>,
    recent_trend: Trend,
    mood_pattern: MoodPattern,
    assessments_completed: usize,
    latest_assessments: Vec<InstrumentHistory>,
    insight: Insight,
    should_notify: bool,
}

pub async fn dashboard_stats(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardStats>, ApiError> {
    let now = Timestamp::now();
    let history = History::load(&ctx, &user.user_id).await?;
    let evaluation = history.evaluate(&ctx, &user.user_id, None, now);
    let overview = JournalAnalytics::from_entries(&ctx.engine.analyzer, &history.entries, now);

    Ok(Json(DashboardStats {
        total_entries: overview.total_entries,
        entries_this_week: overview.entries_this_week,
        current_streak: overview.current_streak,
        average_mood: overview.average_mood,
        dominant_sentiment: overview.dominant_sentiment,
        recent_trend: evaluation.snapshot.recent_trend,
        mood_pattern: evaluation.snapshot.mood_pattern,
        assessments_completed: history.results.len(),
        latest_assessments: summarize(&history.results),
        insight: evaluation.insight,
        should_notify: evaluation.should_notify,
    }))
}
