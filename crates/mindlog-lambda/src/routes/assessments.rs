use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mindlog_core::models::assessment::{Answer, AssessmentResult};
use mindlog_instruments::crisis::{CrisisPayload, crisis_resources};
use mindlog_instruments::history::{InstrumentHistory, summarize};
use mindlog_instruments::{get_instrument_by_test_id, score_submission};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub test_id: Option<u32>,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    result_id: Uuid,
    test_id: u32,
    test_name: String,
    total_score: u32,
    max_score: u32,
    severity_level: String,
    description: String,
    recommendations: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    facet_scores: BTreeMap<String, u32>,
    has_crisis_indicators: bool,
    /// Present only when the answers trip a crisis indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    crisis: Option<CrisisPayload>,
}

#[derive(Serialize)]
pub struct MentalHealthSummary {
    has_results: bool,
    total_assessments: usize,
    instruments: Vec<InstrumentHistory>,
}

pub async fn submit_test(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Path(test_id): Path<u32>,
    Json(req): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let instrument = get_instrument_by_test_id(test_id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {test_id}")))?;

    let scored = score_submission(instrument.as_ref(), &req.answers)?;

    let result = AssessmentResult {
        id: Uuid::new_v4(),
        user_id: user.user_id.clone(),
        test_id,
        kind: instrument.kind(),
        total_score: scored.total_score,
        severity_level: scored.severity_level.clone(),
        answers: req.answers,
        has_crisis_indicators: scored.has_crisis_indicators,
        completed_at: Timestamp::now(),
    };
    ctx.assessments.save(&result).await?;

    if scored.has_crisis_indicators {
        tracing::warn!(
            user_id = %user.user_id,
            test_id,
            result_id = %result.id,
            "crisis indicator present, attaching crisis resources"
        );
    }
    tracing::info!(
        user_id = %user.user_id,
        test_id,
        total_score = scored.total_score,
        severity = %scored.severity_level,
        "assessment submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            result_id: result.id,
            test_id,
            test_name: instrument.name().to_string(),
            total_score: scored.total_score,
            max_score: scored.max_score,
            severity_level: scored.severity_level,
            description: scored.description,
            recommendations: scored.recommendations,
            facet_scores: scored.facet_scores,
            has_crisis_indicators: scored.has_crisis_indicators,
            crisis: scored.has_crisis_indicators.then(crisis_resources),
        }),
    ))
}

pub async fn list_results(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Vec<AssessmentResult>>, ApiError> {
    let results = ctx.assessments.list(&user.user_id, query.test_id).await?;
    Ok(Json(results))
}

pub async fn mental_health_summary(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MentalHealthSummary>, ApiError> {
    let results = ctx.assessments.list(&user.user_id, None).await?;
    Ok(Json(MentalHealthSummary {
        has_results: !results.is_empty(),
        total_assessments: results.len(),
        instruments: summarize(&results),
    }))
}
