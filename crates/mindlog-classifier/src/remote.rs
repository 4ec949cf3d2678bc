//! HTTP inference endpoint classifier.
//!
//! POSTs `{"text": ...}` and expects
//! `{"label": "...", "score": 0.91, "scores": {"positive": .., "neutral": .., "negative": ..}}`.
//! The call is blocking.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mindlog_core::models::sentiment::{Sentiment, SentimentScores};

use crate::error::ClassifierError;
use crate::{Classification, ClassificationSource, SentimentClassifier, normalize_scores};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    pub label: String,
    pub score: f64,
    pub scores: SentimentScores,
}

pub struct RemoteClassifier {
    name: String,
    url: String,
    agent: ureq::Agent,
}

impl RemoteClassifier {
    pub fn new(name: impl Into<String>, url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            name: name.into(),
            url: url.into(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SentimentClassifier for RemoteClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        if text.trim().is_empty() {
            return Err(ClassifierError::EmptyText);
        }

        debug!(model = %self.name, url = %self.url, text_len = text.len(), "requesting inference");

        let mut response = self
            .agent
            .post(&self.url)
            .send_json(&InferenceRequest { text })?;
        let body: InferenceResponse = response.body_mut().read_json()?;

        let classification = parse_response(&self.name, body)?;
        info!(
            model = %self.name,
            sentiment = %classification.sentiment,
            confidence = classification.confidence,
            "inference complete"
        );
        Ok(classification)
    }
}

/// Validate a raw inference response. The label must name a class tied
/// for the highest score.
pub fn parse_response(
    model_name: &str,
    response: InferenceResponse,
) -> Result<Classification, ClassifierError> {
    let sentiment: Sentiment = response
        .label
        .parse()
        .map_err(|e: mindlog_core::error::CoreError| ClassifierError::ResponseParse(e.to_string()))?;

    if !(0.0..=1.0).contains(&response.score) {
        return Err(ClassifierError::ResponseParse(format!(
            "confidence {} outside [0, 1]",
            response.score
        )));
    }

    let scores = normalize_scores(response.scores)?;
    let top = scores.positive.max(scores.neutral).max(scores.negative);
    if scores.get(sentiment) < top {
        return Err(ClassifierError::ResponseParse(format!(
            "label {sentiment} disagrees with scores (dominant {})",
            scores.dominant()
        )));
    }

    Ok(Classification {
        sentiment,
        confidence: response.score,
        scores,
        source: ClassificationSource::Model {
            name: model_name.to_string(),
        },
    })
}
