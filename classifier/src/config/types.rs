use serde::{Deserialize, Serialize};

/// Default host of the Gemini REST API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model used for classification
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Main configuration structure for the spam classifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Model endpoint settings
    pub api: ApiConfig,
}

/// Model endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the model provider
    pub base_url: String,
    /// Model name placed in the request path
    pub model: String,
    /// Name of the environment variable that holds the API key
    pub api_key_env: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ClassifierConfig {
    /// Full `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api.base_url.trim_end_matches('/'),
            self.api.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.model, "gemini-2.5-flash");
        assert_eq!(config.api.api_key_env, "API_KEY");
        assert_eq!(config.api.timeout_seconds, None);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let mut config = ClassifierConfig::default();
        config.api.base_url = "http://127.0.0.1:9000/".to_string();
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ClassifierConfig = toml::from_str(
            r#"
[api]
model = "gemini-2.0-flash"
"#,
        )
        .unwrap();

        assert_eq!(config.api.model, "gemini-2.0-flash");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ClassifierConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }
}
