use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use mindlog_auth::jwt::validate_token;

use crate::error::ApiError;
use crate::state::AppContext;

/// Bearer token validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the JWT.
/// On success, inserts `AuthUser` into request extensions for handlers to use.
pub async fn require_auth(
    State(ctx): State<AppContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        validate_token(token, &ctx.jwt_secret)?
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}
