use std::sync::Arc;
use std::time::Duration;

use eyre::WrapErr;

use mindlog_classifier::SentimentClassifier;
use mindlog_classifier::fallback::FallbackClassifier;
use mindlog_classifier::lexicon::LexiconClassifier;
use mindlog_classifier::remote::RemoteClassifier;
use mindlog_insights::InsightEngine;
use mindlog_insights::config::AnalysisConfig;
use mindlog_storage::{AssessmentRepository, EntryRepository, MemoryStore, S3Store};

use crate::config::{DEFAULT_JWT_TTL_HOURS, DEFAULT_MAX_TEXT_LENGTH, ServerConfig};

/// Shared application context, injected into all route handlers via Axum
/// state. Built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub entries: Arc<dyn EntryRepository>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub engine: Arc<InsightEngine>,
    pub analysis: Arc<AnalysisConfig>,
    pub jwt_secret: Arc<[u8]>,
    pub jwt_ttl: Duration,
    pub dev_tokens: bool,
    pub max_text_length: usize,
    pub storage_kind: &'static str,
}

impl AppContext {
    /// In-memory repositories, lexicon classifier, default thresholds.
    pub fn in_memory(jwt_secret: &[u8]) -> Self {
        let store = Arc::new(MemoryStore::new());
        let analysis = AnalysisConfig::default();
        Self {
            entries: store.clone(),
            assessments: store,
            classifier: Arc::new(lexicon_only()),
            engine: Arc::new(InsightEngine::new(&analysis)),
            analysis: Arc::new(analysis),
            jwt_secret: Arc::from(jwt_secret),
            jwt_ttl: Duration::from_secs(DEFAULT_JWT_TTL_HOURS * 3600),
            dev_tokens: false,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            storage_kind: "memory",
        }
    }

    pub async fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let mut ctx = Self::in_memory(config.jwt_secret.as_bytes());
        ctx.jwt_ttl = config.jwt_ttl;
        ctx.dev_tokens = config.dev_secret;
        ctx.max_text_length = config.max_text_length;

        let mut s3_store = None;
        if let Some(bucket) = &config.bucket {
            let client = mindlog_storage::client::build_client().await;
            let store = Arc::new(S3Store::new(client, bucket.clone()));
            ctx.entries = store.clone();
            ctx.assessments = store.clone();
            ctx.storage_kind = "s3";
            s3_store = Some(store);
        }

        if let Some(url) = &config.classifier_url {
            let remote = RemoteClassifier::new("remote", url.clone(), config.classifier_timeout);
            ctx.classifier = Arc::new(FallbackClassifier::new(remote, LexiconClassifier));
        }

        let analysis = if let Some(path) = &config.analysis_config_path {
            let contents = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("reading analysis config {}", path.display()))?;
            Some(AnalysisConfig::from_json(&contents)?)
        } else if let Some(store) = &s3_store {
            match store.load_analysis_config().await? {
                Some(value) => Some(AnalysisConfig::from_json(&value.to_string())?),
                None => None,
            }
        } else {
            None
        };

        if let Some(analysis) = analysis {
            tracing::info!(config_version = analysis.config_version, "loaded analysis config");
            ctx = ctx.with_analysis_config(analysis);
        }

        Ok(ctx)
    }

    pub fn with_analysis_config(mut self, analysis: AnalysisConfig) -> Self {
        self.engine = Arc::new(InsightEngine::new(&analysis));
        self.analysis = Arc::new(analysis);
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }
}

/// No model configured: every classification is a tagged fallback.
fn lexicon_only() -> FallbackClassifier<RemoteClassifier, LexiconClassifier> {
    FallbackClassifier::fallback_only(LexiconClassifier)
}
