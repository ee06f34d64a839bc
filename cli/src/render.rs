use crate::error::{CliError, Result};
use colored::Colorize;
use serde::Serialize;
use spam_classifier::{InteractionState, Prediction};

/// JSON shape printed with `--json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    is_spam: bool,
    reason: &'a str,
    model: &'a str,
}

/// Verdict and reason for the terminal
pub fn render_prediction(prediction: &Prediction) -> String {
    let verdict = if prediction.is_spam {
        "🚨 SPAM DETECTED".red().bold()
    } else {
        "✅ NOT SPAM".green().bold()
    };

    let reason = if prediction.reason.trim().is_empty() {
        "(no reason given)".dimmed()
    } else {
        prediction.reason.normal()
    };

    format!("{verdict}\n{} {reason}", "Reason:".bold())
}

pub fn render_json(prediction: &Prediction, model: &str) -> Result<String> {
    let report = JsonReport {
        is_spam: prediction.is_spam,
        reason: &prediction.reason,
        model,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render a finished interaction: the result text, or the error it ended in
pub fn render_state(state: &InteractionState, json: bool, model: &str) -> Result<String> {
    match state {
        InteractionState::Success(prediction) if json => render_json(prediction, model),
        InteractionState::Success(prediction) => Ok(render_prediction(prediction)),
        InteractionState::Error(message) => Err(CliError::Prediction(message.clone())),
        InteractionState::Idle | InteractionState::Loading => Err(CliError::Other(
            "No classification result is available".to_string(),
        )),
    }
}
