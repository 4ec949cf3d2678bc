use tracing_subscriber::EnvFilter;

use mindlog_lambda::build_router;
use mindlog_lambda::config::ServerConfig;
use mindlog_lambda::state::AppContext;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let ctx = AppContext::from_config(&config).await?;
    tracing::info!(
        storage = ctx.storage_kind,
        classifier = ctx.classifier.name(),
        max_text_length = ctx.max_text_length,
        "mindlog api starting"
    );

    let app = build_router(ctx);
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
