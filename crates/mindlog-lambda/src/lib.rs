//! mindlog-lambda
//!
//! HTTP API for the journaling service. Handlers fetch history from the
//! repositories, run the insight engine and shape the JSON responses.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppContext;

/// Build the full router over an application context.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route(
            "/journal/entries",
            get(routes::journal::list_entries).post(routes::journal::create_entry),
        )
        .route("/journal/entries/{id}", delete(routes::journal::delete_entry))
        .route("/journal/analytics", get(routes::journal::analytics))
        .route(
            "/recommendations",
            get(routes::recommendations::recommendations),
        )
        .route(
            "/notifications/insights",
            get(routes::recommendations::notification_insights),
        )
        .route("/tests/{id}/submit", post(routes::assessments::submit_test))
        .route("/tests/results", get(routes::assessments::list_results))
        .route(
            "/mental-health/summary",
            get(routes::assessments::mental_health_summary),
        )
        .route("/dashboard/stats", get(routes::dashboard::dashboard_stats))
        .route_layer(axum_mw::from_fn_with_state(
            ctx.clone(),
            middleware::auth::require_auth,
        ));

    let mut app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth, public questionnaire data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        );

    // Only reachable when running on the development secret.
    if ctx.dev_tokens {
        app = app.route("/auth/dev-token", post(routes::auth::issue_dev_token));
    }

    app.merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(ctx)
}
