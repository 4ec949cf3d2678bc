use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindlog_classifier::ClassificationSource;
use mindlog_core::models::entry::{JournalEntry, NewJournalEntry};
use mindlog_core::models::strategy::CopingStrategy;
use mindlog_insights::analytics::JournalAnalytics;
use mindlog_insights::analyzer::PatternSummary;
use mindlog_insights::feedback::{EntryFeedback, entry_feedback};
use mindlog_insights::insight::{Insight, Priority};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::{History, TOP_STRATEGIES};
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AiAnalysis {
    pub insight: Insight,
    pub recommendations: Vec<CopingStrategy>,
    pub patterns: PatternSummary,
    pub should_notify: bool,
    pub notification_priority: Priority,
    pub feedback: EntryFeedback,
}

#[derive(Debug, Serialize)]
pub struct CreatedEntry {
    pub entry: JournalEntry,
    pub classification_source: ClassificationSource,
    pub ai_analysis: AiAnalysis,
}

/// Trimmed text, or a 400 when empty or longer than `max_chars`.
pub fn validate_text(text: &str, max_chars: usize) -> Result<String, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("entry text must not be empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(ApiError::BadRequest(format!(
            "entry text is {chars} characters, the limit is {max_chars}"
        )));
    }
    Ok(text.to_string())
}

pub async fn create_entry(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<NewJournalEntry>,
) -> Result<(StatusCode, Json<CreatedEntry>), ApiError> {
    let text = validate_text(&req.text, ctx.max_text_length)?;

    let classifier = ctx.classifier.clone();
    let input = text.clone();
    let classification =
        tokio::task::spawn_blocking(move || classifier.classify(&input)).await??;

    if classification.source.is_fallback() {
        tracing::warn!(
            user_id = %user.user_id,
            source = ?classification.source,
            "entry classified by fallback"
        );
    }

    let now = Timestamp::now();
    let entry = JournalEntry::new(
        user.user_id.clone(),
        text,
        classification.sentiment,
        classification.confidence,
        classification.scores,
        req.tags,
        now,
    );
    ctx.entries.append(&entry).await?;

    let history = History::load(&ctx, &user.user_id).await?;
    let evaluation = history.evaluate(&ctx, &user.user_id, Some(entry.sentiment), now);

    tracing::info!(
        user_id = %user.user_id,
        entry_id = %entry.id,
        sentiment = %entry.sentiment,
        mood_score = entry.mood_score,
        "journal entry created"
    );

    let feedback = entry_feedback(&entry);
    let mut recommendations = evaluation.strategies;
    recommendations.truncate(TOP_STRATEGIES);

    Ok((
        StatusCode::CREATED,
        Json(CreatedEntry {
            entry,
            classification_source: classification.source,
            ai_analysis: AiAnalysis {
                notification_priority: evaluation.insight.priority,
                insight: evaluation.insight,
                recommendations,
                patterns: evaluation.snapshot.summary(),
                should_notify: evaluation.should_notify,
                feedback,
            },
        }),
    ))
}

pub async fn list_entries(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let entries = ctx.entries.list(&user.user_id, query.limit).await?;
    Ok(Json(entries))
}

pub async fn delete_entry(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ctx.entries.delete(&user.user_id, id).await?;
    tracing::info!(user_id = %user.user_id, entry_id = %id, "journal entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn analytics(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<JournalAnalytics>, ApiError> {
    let entries = ctx.entries.list(&user.user_id, None).await?;
    Ok(Json(JournalAnalytics::from_entries(
        &ctx.engine.analyzer,
        &entries,
        Timestamp::now(),
    )))
}
