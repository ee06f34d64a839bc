use crate::error::{ClassifierError, Result};
use std::fs;
use std::path::Path;

/// Generate the default spam-detect.toml template with comments
pub fn generate_default_config_template() -> String {
    r#"# Spam Detect Configuration
# Settings for the hosted model that classifies email content

[api]
# Base URL of the Gemini REST API
base_url = "https://generativelanguage.googleapis.com"

# Model used for classification
model = "gemini-2.5-flash"

# Environment variable that holds the API key (required at startup)
api_key_env = "API_KEY"

# Request timeout in seconds (optional, no timeout when omitted)
# timeout_seconds = 30
"#
    .to_string()
}

/// Write the default configuration file.
///
/// Returns `Ok(true)` when the file was written and `Ok(false)` when it
/// already existed and `overwrite` was not set.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ClassifierError::Io)?;
    }

    fs::write(path, generate_default_config_template()).map_err(ClassifierError::Io)?;
    Ok(true)
}
