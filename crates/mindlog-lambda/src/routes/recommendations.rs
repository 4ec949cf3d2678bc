use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::Serialize;

use mindlog_core::models::strategy::CopingStrategy;
use mindlog_insights::analyzer::PatternSummary;
use mindlog_insights::insight::{Insight, Priority};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::{History, TOP_STRATEGIES};
use crate::state::AppContext;

#[derive(Serialize)]
pub struct Recommendations {
    strategies: Vec<CopingStrategy>,
    insight: Insight,
    patterns: PatternSummary,
    assessments_considered: usize,
}

#[derive(Serialize)]
pub struct NotificationInsights {
    insight: Insight,
    strategies: Vec<CopingStrategy>,
    patterns: PatternSummary,
    should_notify: bool,
    priority: Priority,
}

/// Full strategy list for the user's current state.
pub async fn recommendations(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Recommendations>, ApiError> {
    let history = History::load(&ctx, &user.user_id).await?;
    let evaluation = history.evaluate(&ctx, &user.user_id, None, Timestamp::now());

    Ok(Json(Recommendations {
        strategies: evaluation.strategies,
        insight: evaluation.insight,
        patterns: evaluation.snapshot.summary(),
        assessments_considered: history.latest.len(),
    }))
}

pub async fn notification_insights(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<NotificationInsights>, ApiError> {
    let history = History::load(&ctx, &user.user_id).await?;
    let evaluation = history.evaluate(&ctx, &user.user_id, None, Timestamp::now());

    let mut strategies = evaluation.strategies;
    strategies.truncate(TOP_STRATEGIES);

    Ok(Json(NotificationInsights {
        priority: evaluation.insight.priority,
        insight: evaluation.insight,
        strategies,
        patterns: evaluation.snapshot.summary(),
        should_notify: evaluation.should_notify,
    }))
}
