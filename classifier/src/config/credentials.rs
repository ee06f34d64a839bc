use crate::error::{ClassifierError, Result};
use std::fmt;

/// API credential read from the process environment
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Read the key from `var`. An unset or blank variable is an error.
    pub fn from_env(var: &str) -> Result<Self> {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    /// Resolve `var` through `lookup` with the same rules as [`ApiKey::from_env`]
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ClassifierError::missing_api_key(var)),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(
        vars: &'a [(&'a str, &'a str)],
    ) -> impl FnOnce(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_reads_and_trims_key() {
        let vars = [("API_KEY", " secret-key ")];
        let key = ApiKey::from_lookup("API_KEY", lookup_from(&vars)).unwrap();
        assert_eq!(key.expose(), "secret-key");
    }

    #[test]
    fn test_missing_or_blank_key_is_fatal() {
        let err = ApiKey::from_lookup("API_KEY", lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingApiKey { ref var } if var == "API_KEY"));

        let vars = [("API_KEY", "   ")];
        assert!(ApiKey::from_lookup("API_KEY", lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_from_env_reports_unset_variable() {
        let err = ApiKey::from_env("SPAM_CLASSIFIER_TEST_KEY_NEVER_SET").unwrap_err();
        assert_eq!(
            err.to_string(),
            "SPAM_CLASSIFIER_TEST_KEY_NEVER_SET environment variable not set"
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
