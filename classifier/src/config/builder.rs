use crate::config::types::{ApiConfig, ClassifierConfig};
use crate::error::Result;

/// Builder for ClassifierConfig to improve API ergonomics
pub struct ClassifierConfigBuilder {
    api: ApiConfig,
}

impl ClassifierConfigBuilder {
    /// Create a new config builder seeded with the defaults
    pub fn new() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }

    /// Set the provider base URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Set the model name
    #[must_use]
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.api.model = model.into();
        self
    }

    /// Set the environment variable holding the API key
    #[must_use]
    pub fn api_key_env<S: Into<String>>(mut self, var: S) -> Self {
        self.api.api_key_env = var.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.api.timeout_seconds = Some(seconds);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClassifierConfig> {
        let config = ClassifierConfig { api: self.api };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ClassifierConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = ClassifierConfig::builder()
            .base_url("http://127.0.0.1:3000")
            .model("gemini-2.0-flash")
            .api_key_env("GEMINI_API_KEY")
            .timeout(10)
            .build()
            .unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.api.model, "gemini-2.0-flash");
        assert_eq!(config.api.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.api.timeout_seconds, Some(10));
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(ClassifierConfig::builder().model("").build().is_err());
        assert!(ClassifierConfig::builder()
            .model(" gemini-2.5-flash ")
            .build()
            .is_err());
        assert!(ClassifierConfig::builder().base_url("not a url").build().is_err());
        assert!(ClassifierConfig::builder().timeout(0).build().is_err());
    }
}
