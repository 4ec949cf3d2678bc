use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("inference request failed: {0}")]
    Request(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("nothing to classify")]
    EmptyText,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ureq::Error> for ClassifierError {
    fn from(err: ureq::Error) -> Self {
        ClassifierError::Request(err.to_string())
    }
}
