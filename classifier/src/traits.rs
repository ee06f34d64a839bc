use crate::controller::InteractionState;
use crate::error::Result;
use crate::types::Prediction;
use reqwest::{Request, Response};
use std::future::Future;

/// Trait for spam classifier implementations
pub trait SpamClassifier: Send + Sync {
    /// Classify one email's content
    fn classify(&self, email_content: &str) -> impl Future<Output = Result<Prediction>> + Send;
}

/// Trait for building the outbound model request
pub trait RequestBuilder: Send + Sync {
    /// Build a `generateContent` request embedding the email content
    fn build_request(&self, email_content: &str) -> Result<Request>;
}

/// Trait for turning the provider's HTTP response into model output text
pub trait ResponseConverter: Send + Sync {
    /// Extract the generated text, or fail with the provider's error
    fn convert_response(&self, response: Response) -> impl Future<Output = Result<String>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}

/// Type alias for the state transition observer
pub type TransitionCallback = Box<dyn Fn(&InteractionState) + Send + Sync>;
