use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppContext;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    storage: &'static str,
    classifier: String,
}

pub async fn health_check(State(ctx): State<AppContext>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        storage: ctx.storage_kind,
        classifier: ctx.classifier.name().to_string(),
    })
}
