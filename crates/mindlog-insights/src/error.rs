use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error(
        "analysis config_version {found} is newer than this build supports ({supported})"
    )]
    UnsupportedConfigVersion { found: u32, supported: u32 },

    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),

    #[error("analysis config is not a JSON object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
