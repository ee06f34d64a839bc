use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spam classification operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Prefix shared by every failure that comes back from the model call
pub const PREDICTION_FAILURE_PREFIX: &str = "Failed to get prediction from Gemini API";

/// Message shown when the submitted email content is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Email content cannot be empty.";

/// Message used when the model answers with JSON of the wrong shape
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid response format from API";

/// Error types for spam classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    #[error("{var} environment variable not set")]
    MissingApiKey { var: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Network, authentication, quota, or any other non-success answer from the provider
    #[error("{}: {message}", PREDICTION_FAILURE_PREFIX)]
    Request { message: String },

    /// Response text that is not JSON, or JSON without the expected fields
    #[error("{}: {message}", PREDICTION_FAILURE_PREFIX)]
    MalformedResponse { message: String },
}

impl ClassifierError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new external call error
    pub fn request<S: Into<String>>(message: S) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Create a new malformed response error
    pub fn malformed_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new missing credential error
    pub fn missing_api_key<S: Into<String>>(var: S) -> Self {
        Self::MissingApiKey { var: var.into() }
    }

    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }

    /// True for failures produced while talking to the model, as opposed to
    /// input validation or local setup problems.
    pub fn is_prediction_failure(&self) -> bool {
        self.is_request_failure() || self.is_malformed_response()
    }
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        Self::request(err.to_string())
    }
}
