use crate::error::Result;
use spam_classifier::ClassifierConfig;
use std::path::PathBuf;

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "spam-detect.toml";

/// Configuration files tried in order when `--config` is not given
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("spam-detect").join("config.toml"));
    }
    candidates
}

/// Load the configuration for this run and apply command-line overrides
pub fn load_config(explicit: Option<&str>, model: Option<&str>) -> Result<ClassifierConfig> {
    let mut config = match explicit {
        Some(path) => ClassifierConfig::load_with_validation(path)?,
        None => ClassifierConfig::load_or_default(&config_candidates())?,
    };

    if let Some(model) = model {
        config.api.model = model.to_string();
        config.validate()?;
    }

    Ok(config)
}
