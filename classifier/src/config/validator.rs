use crate::config::types::ClassifierConfig;
use crate::error::{ClassifierError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;
use url::Url;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ClassifierConfig;

    fn validate(&self, config: &ClassifierConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation naming the configuration source in every message
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &ClassifierConfig,
        config_path: P,
    ) -> Result<()> {
        let source = config_path.as_ref().to_string_lossy();
        let api = &config.api;

        let url = Url::parse(&api.base_url).map_err(|e| {
            ClassifierError::invalid_config(format!(
                "Invalid base_url '{}' in {}: {}",
                api.base_url, source, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClassifierError::invalid_config(format!(
                "base_url in {} must use http or https, got '{}'",
                source,
                url.scheme()
            )));
        }

        if api.model.trim().is_empty() {
            return Err(ClassifierError::invalid_config(format!(
                "No model configured in {}. Set [api] model, e.g. \"gemini-2.5-flash\".",
                source
            )));
        }
        // The name is spliced into the request path as-is
        if api.model.contains('/') || api.model.contains(char::is_whitespace) {
            return Err(ClassifierError::invalid_config(format!(
                "Invalid model name '{}' in {}",
                api.model, source
            )));
        }

        if api.api_key_env.trim().is_empty() {
            return Err(ClassifierError::invalid_config(format!(
                "api_key_env in {} must name an environment variable",
                source
            )));
        }

        if api.timeout_seconds == Some(0) {
            return Err(ClassifierError::invalid_config(format!(
                "timeout_seconds in {} must be greater than zero; remove it to disable the timeout",
                source
            )));
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(edit: impl FnOnce(&mut ClassifierConfig)) -> ClassifierConfig {
        let mut config = ClassifierConfig::default();
        edit(&mut config);
        config
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidatorImpl::new()
            .validate(&ClassifierConfig::default())
            .is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = config_with(|c| c.api.base_url = "file:///tmp/api".to_string());
        let err = ConfigValidatorImpl::new().validate(&config).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_bad_model_names() {
        for model in [
            "",
            "   ",
            "models/gemini",
            "gemini flash",
            " gemini-2.5-flash ",
            "gemini-2.5-flash\n",
        ] {
            let config = config_with(|c| c.api.model = model.to_string());
            assert!(
                ConfigValidatorImpl::new().validate(&config).is_err(),
                "accepted model {model:?}"
            );
        }
    }

    #[test]
    fn test_error_names_the_source() {
        let config = config_with(|c| c.api.api_key_env = String::new());
        let err = ConfigValidatorImpl::new()
            .validate_with_context(&config, "custom.toml")
            .unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = config_with(|c| c.api.timeout_seconds = Some(0));
        assert!(ConfigValidatorImpl::new().validate(&config).is_err());
    }
}
