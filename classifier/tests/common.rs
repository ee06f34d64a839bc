//! Shared helpers for spam-classifier integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use spam_classifier::{ApiKey, ClassifierConfig, GeminiClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key-123";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// Configuration pointing at a mock server
pub fn config_for(server: &MockServer) -> ClassifierConfig {
    ClassifierConfig::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server config is valid")
}

/// Client pointing at a mock server
pub fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(&config_for(server), ApiKey::new(TEST_API_KEY)).expect("client builds")
}

/// Gemini response body whose single candidate carries `text`
pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Gemini response body carrying a JSON prediction
pub fn prediction_body(is_spam: bool, reason: &str) -> Value {
    candidate_body(&json!({ "is_spam": is_spam, "reason": reason }).to_string())
}

/// Gemini error envelope
pub fn error_body(code: u16, message: &str, status: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}

pub const SPAM_EMAIL: &str = "Dear Customer,\n\nYour account has been suspended. \
Verify your password within 24 hours at http://secure-bank.example.biz/login \
or it will be deleted.\n\nRegards, Support";

pub const HAM_EMAIL: &str = "Hi Ana,\n\nAttaching the slides from Thursday's review. \
Let me know if the numbers on page 4 look right.\n\nThanks,\nLuis";
