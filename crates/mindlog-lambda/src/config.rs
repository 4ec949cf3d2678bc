//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use eyre::{WrapErr, bail};

pub const DEFAULT_JWT_TTL_HOURS: u64 = 24;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 10;

/// Used by debug builds when `MINDLOG_JWT_SECRET` is unset.
const DEV_JWT_SECRET: &str = "mindlog-development-secret";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// S3 bucket. `None` selects the in-memory store.
    pub bucket: Option<String>,
    pub jwt_secret: String,
    /// True when `jwt_secret` is the built-in development secret.
    pub dev_secret: bool,
    pub jwt_ttl: Duration,
    pub classifier_url: Option<String>,
    pub classifier_timeout: Duration,
    pub max_text_length: usize,
    pub analysis_config_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (jwt_secret, dev_secret) = match get("MINDLOG_JWT_SECRET") {
            Some(secret) => (secret, false),
            None if cfg!(debug_assertions) => {
                tracing::warn!("MINDLOG_JWT_SECRET not set, using the development secret");
                (DEV_JWT_SECRET.to_string(), true)
            }
            None => bail!("MINDLOG_JWT_SECRET must be set"),
        };

        let jwt_ttl_hours = parse_or(
            get("MINDLOG_JWT_TTL_HOURS"),
            "MINDLOG_JWT_TTL_HOURS",
            DEFAULT_JWT_TTL_HOURS,
        )?;
        if jwt_ttl_hours == 0 {
            bail!("MINDLOG_JWT_TTL_HOURS must be at least 1");
        }

        let max_text_length = parse_or(
            get("MINDLOG_MAX_TEXT_LENGTH"),
            "MINDLOG_MAX_TEXT_LENGTH",
            DEFAULT_MAX_TEXT_LENGTH,
        )?;
        if max_text_length == 0 {
            bail!("MINDLOG_MAX_TEXT_LENGTH must be at least 1");
        }

        let timeout_secs = parse_or(
            get("MINDLOG_CLASSIFIER_TIMEOUT_SECS"),
            "MINDLOG_CLASSIFIER_TIMEOUT_SECS",
            DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        )?;

        Ok(Self {
            bucket: get("MINDLOG_BUCKET"),
            jwt_secret,
            dev_secret,
            jwt_ttl: Duration::from_secs(jwt_ttl_hours * 3600),
            classifier_url: get("MINDLOG_CLASSIFIER_URL"),
            classifier_timeout: Duration::from_secs(timeout_secs),
            max_text_length,
            analysis_config_path: get("MINDLOG_ANALYSIS_CONFIG").map(PathBuf::from),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .parse()
            .wrap_err_with(|| format!("{key} must be a whole number, got {value:?}")),
        None => Ok(default),
    }
}
