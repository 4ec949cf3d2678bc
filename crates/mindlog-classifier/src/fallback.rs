use tracing::warn;

use crate::error::ClassifierError;
use crate::{Classification, ClassificationSource, SentimentClassifier};

/// Tries `primary` and, when it fails or is not configured, answers with
/// `fallback` tagged as [`ClassificationSource::Fallback`].
pub struct FallbackClassifier<P, F> {
    primary: Option<P>,
    fallback: F,
}

impl<P: SentimentClassifier, F: SentimentClassifier> FallbackClassifier<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary: Some(primary),
            fallback,
        }
    }

    /// No primary model configured; every answer is a fallback.
    pub fn fallback_only(fallback: F) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    fn degrade(&self, text: &str, reason: String) -> Result<Classification, ClassifierError> {
        let mut classification = self.fallback.classify(text)?;
        classification.source = ClassificationSource::Fallback { reason };
        Ok(classification)
    }
}

impl<P: SentimentClassifier, F: SentimentClassifier> SentimentClassifier
    for FallbackClassifier<P, F>
{
    fn name(&self) -> &str {
        match &self.primary {
            Some(primary) => primary.name(),
            None => self.fallback.name(),
        }
    }

    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let Some(primary) = &self.primary else {
            return self.degrade(text, "no model configured".to_string());
        };

        match primary.classify(text) {
            Ok(classification) => Ok(classification),
            // Empty input fails the same way everywhere.
            Err(ClassifierError::EmptyText) => Err(ClassifierError::EmptyText),
            Err(e) => {
                warn!(
                    model = primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "primary classifier failed, using fallback"
                );
                self.degrade(text, format!("{} failed: {e}", primary.name()))
            }
        }
    }
}
