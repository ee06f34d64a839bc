//! Terminal messages. Only verdicts and `--json` reports go to stdout.

use colored::Colorize;

pub fn success(message: &str) {
    eprintln!("{} {}", "✔".green().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "!".yellow().bold(), message.yellow());
}

/// Report a failed classification without leaving the interactive loop
pub fn error(message: &str) {
    eprintln!("{} {}", "✘".red().bold(), message.red());
}

/// Title underlined to its own width
pub fn heading(title: &str) {
    let rule = "─".repeat(title.chars().count());
    eprintln!("\n{}\n{}", title.bold(), rule.dimmed());
}

/// Secondary detail such as the model in use or request timing
pub fn note(message: &str) {
    eprintln!("{} {}", "·".dimmed(), message.dimmed());
}
