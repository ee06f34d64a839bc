use crate::error::{Result, ResultExt};
use crate::ui;
use spam_classifier::config::{ensure_config_file_exists, types::DEFAULT_API_KEY_ENV};
use std::path::Path;

/// Outcome of `spam-detect init`
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

pub fn execute(config_path: String, force: bool) -> Result<()> {
    let path = Path::new(&config_path);

    match write_config(path, force)? {
        InitOutcome::Created => {
            ui::success(&format!("Configuration written to {}", path.display()));
            ui::note(&format!(
                "Set the {} environment variable to your Gemini API key before classifying",
                DEFAULT_API_KEY_ENV
            ));
        }
        InitOutcome::AlreadyExists => {
            ui::warning(&format!(
                "{} already exists; re-run with --force to overwrite it",
                path.display()
            ));
        }
    }

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<InitOutcome> {
    let written = ensure_config_file_exists(path, force)
        .with_context(|| format!("Failed to create configuration file {}", path.display()))?;

    Ok(if written {
        InitOutcome::Created
    } else {
        InitOutcome::AlreadyExists
    })
}
