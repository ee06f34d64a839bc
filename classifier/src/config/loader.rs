use crate::config::types::ClassifierConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{ClassifierError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ClassifierError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ClassifierConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration and validate it, naming the file in any error
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ClassifierError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ClassifierError::Io)?;

        let config: ClassifierConfig = toml::from_str(&content).map_err(|e| {
            ClassifierError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

impl ClassifierConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ClassifierConfigBuilder {
        crate::config::builder::ClassifierConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with validation
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load the first existing file among `candidates`, or the defaults when none exists
    pub fn load_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        match candidates.iter().find(|p| p.as_ref().is_file()) {
            Some(path) => Self::load_with_validation(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate this configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
