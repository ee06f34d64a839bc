use crate::error::{ClassifierError, Result};
use crate::http::payload::{ApiErrorEnvelope, GenerateContentResponse};
use crate::traits::ResponseConverter;
use reqwest::{Response, StatusCode};

/// Implementation of ResponseConverter trait
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Interpret a status and raw body as model output text
    pub fn interpret(&self, status: StatusCode, body: &str) -> Result<String> {
        if !status.is_success() {
            return Err(ClassifierError::request(describe_failure(status, body)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
            ClassifierError::malformed_response(format!("Unexpected response body: {}", e))
        })?;

        parsed.text().ok_or_else(|| {
            let detail = match (parsed.block_reason(), parsed.candidates.is_empty()) {
                (Some(reason), _) => format!("Prompt was blocked: {}", reason),
                (None, true) => "Response contained no candidates".to_string(),
                (None, false) => match parsed.finish_reason() {
                    Some(reason) => format!("Candidate had no content (finish reason: {})", reason),
                    None => "Candidate had no content".to_string(),
                },
            };
            ClassifierError::malformed_response(detail)
        })
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseConverter for ResponseConverterImpl {
    async fn convert_response(&self, response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        self.interpret(status, &body)
    }
}

/// Human-readable description of a non-success answer
fn describe_failure(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

    match detail {
        Some(detail) => format!("API request failed with status {}: {}", status, detail),
        None => format!("API request failed with status {}", status),
    }
}
