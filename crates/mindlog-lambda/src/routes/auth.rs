use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use mindlog_auth::jwt::issue_token;

use crate::error::ApiError;
use crate::state::AppContext;

#[derive(Deserialize)]
pub struct DevTokenRequest {
    user_id: String,
}

#[derive(Serialize)]
pub struct DevTokenResponse {
    token: String,
    token_type: &'static str,
    expires_in: u64,
}

/// Mint a token for any user id. Registered only under the development
/// secret, for local runs without an identity provider.
pub async fn issue_dev_token(
    State(ctx): State<AppContext>,
    Json(req): Json<DevTokenRequest>,
) -> Result<Json<DevTokenResponse>, ApiError> {
    let user_id = req.user_id.trim();
    if user_id.is_empty() {
        return Err(ApiError::BadRequest("user_id must not be empty".to_string()));
    }

    let token = issue_token(user_id, &ctx.jwt_secret, ctx.jwt_ttl)?;
    tracing::warn!(user_id, "issued development token");

    Ok(Json(DevTokenResponse {
        token,
        token_type: "Bearer",
        expires_in: ctx.jwt_ttl.as_secs(),
    }))
}
