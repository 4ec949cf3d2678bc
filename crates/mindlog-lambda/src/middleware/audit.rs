use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every API request as a structured `api_request` event. Journal text
/// and answers never appear here, only routing metadata.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        elapsed_ms = elapsed_ms,
        "api_request"
    );

    response
}
