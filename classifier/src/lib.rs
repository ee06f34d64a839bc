//! Spam Classifier - email spam detection through a hosted language model
//!
//! This crate sends email content to the Gemini `generateContent` endpoint
//! with a schema-constrained prompt and turns the answer into a
//! [`Prediction`]. The [`InteractionController`] wraps a classifier in the
//! idle/loading/success/error lifecycle a user interface renders.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Classification modules
pub mod controller;
pub mod http;
pub mod prompt;
pub mod traits;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use config::{ApiKey, ClassifierConfig, ClassifierConfigBuilder};
pub use controller::{InteractionController, InteractionState};
pub use error::{ClassifierError, Result};
pub use http::GeminiClient;
pub use traits::{SpamClassifier, TransitionCallback};
pub use types::Prediction;

/// Classify one email with a client built from `config`, reading the API key
/// from the configured environment variable
pub async fn detect_spam(config: &ClassifierConfig, email_content: &str) -> Result<Prediction> {
    let client = GeminiClient::from_env(config)?;
    client.classify(email_content).await
}
