use spam_classifier::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// The classification finished in the error state
    #[error("{0}")]
    Prediction(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Classifier(err) => err.to_string(),
            Self::Json(err) => format!("Failed to serialize JSON: {err}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::Prediction(msg) => msg.clone(),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_errors_keep_their_message() {
        let err: CliError = ClassifierError::missing_api_key("API_KEY").into();
        assert_eq!(err.user_message(), "API_KEY environment variable not set");
    }

    #[test]
    fn test_context_is_prepended() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Result<()> = Err(io).with_context(|| "Failed to read mail.txt");

        let message = err.unwrap_err().user_message();
        assert!(message.starts_with("Failed to read mail.txt: I/O operation failed"));
        assert!(message.contains("no such file"));
    }
}
