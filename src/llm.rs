//! Language-understanding boundary
//!
//! Turns a free-text query into an [`IntentResult`]. The agent only sees the
//! [`IntentClassifier`] trait, so tests can stand in fixed answers for the
//! real model.

mod error;
mod gemini;
mod types;

pub use error::ClassifyError;
pub use gemini::GeminiClassifier;
pub use types::{Intent, IntentResult};

use async_trait::async_trait;

/// Classifies a user query into an intent and optional train number
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, query: &str) -> Result<IntentResult, ClassifyError>;
}

/// Logging wrapper for classifiers
pub struct LoggingClassifier<C> {
    inner: C,
}

impl<C: IntentClassifier> LoggingClassifier<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: IntentClassifier> IntentClassifier for LoggingClassifier<C> {
    async fn classify(&self, query: &str) -> Result<IntentResult, ClassifyError> {
        let start = std::time::Instant::now();
        let result = self.inner.classify(query).await;
        let duration = start.elapsed();

        match &result {
            Ok(intent) => {
                tracing::info!(
                    duration_ms = %duration.as_millis(),
                    intent = intent.intent.as_str(),
                    train_number = ?intent.train_number,
                    "Intent classified"
                );
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    error = %e,
                    "Intent classification failed"
                );
            }
        }

        result
    }
}
