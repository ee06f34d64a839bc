use crate::config::{ApiKey, ClassifierConfig};
use crate::error::{ClassifierError, Result};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::{RequestBuilder, ResponseConverter, SpamClassifier};
use crate::types::Prediction;
use crate::validation::parse_prediction;
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;

/// Spam classifier backed by the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    model: String,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl GeminiClient {
    /// Create a new client from configuration and a credential
    pub fn new(config: &ClassifierConfig, api_key: ApiKey) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config, api_key)?;

        Ok(Self {
            client,
            model: config.api.model.clone(),
            request_builder,
            response_converter: ResponseConverterImpl::new(),
        })
    }

    /// Create a client whose key is read from the configured environment variable
    pub fn from_env(config: &ClassifierConfig) -> Result<Self> {
        let api_key = ApiKey::from_env(&config.api.api_key_env)?;
        Self::new(config, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request_prediction(&self, email_content: &str) -> Result<Prediction> {
        if email_content.trim().is_empty() {
            return Err(ClassifierError::EmptyInput);
        }

        let request = self.request_builder.build_request(email_content)?;
        tracing::debug!(
            url = %request.url(),
            model = %self.model,
            content_len = email_content.len(),
            "Requesting spam prediction"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ClassifierError::request(error_chain(&e)))?;

        let text = self.response_converter.convert_response(response).await?;
        let prediction = parse_prediction(&text)?;

        tracing::debug!(is_spam = prediction.is_spam, "Received spam prediction");
        Ok(prediction)
    }
}

impl SpamClassifier for GeminiClient {
    async fn classify(&self, email_content: &str) -> Result<Prediction> {
        let result = self.request_prediction(email_content).await;
        if let Err(err) = &result {
            if err.is_prediction_failure() {
                tracing::error!(model = %self.model, error = %err, "Error detecting spam");
            }
        }
        result
    }
}

/// Render an error with its full source chain, since reqwest's own message
/// omits the underlying cause.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
