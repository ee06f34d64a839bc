use crate::error::{ClassifierError, Result, INVALID_FORMAT_MESSAGE};
use crate::types::Prediction;
use serde_json::Value;

/// Parse the model's response text into a [`Prediction`].
///
/// The text is trimmed before parsing. Only presence and type of the two
/// fields are checked: an empty `reason` is accepted and unknown fields are
/// ignored.
pub fn parse_prediction(text: &str) -> Result<Prediction> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| ClassifierError::malformed_response(e.to_string()))?;

    let is_spam = value.get("is_spam").and_then(Value::as_bool);
    let reason = value.get("reason").and_then(Value::as_str);

    match (is_spam, reason) {
        (Some(is_spam), Some(reason)) => Ok(Prediction::new(is_spam, reason)),
        _ => Err(ClassifierError::malformed_response(INVALID_FORMAT_MESSAGE)),
    }
}
