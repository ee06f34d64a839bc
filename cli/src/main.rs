mod classify;
mod cli;
mod error;
mod init;
mod input;
mod logging;
mod progress;
mod render;
mod settings;
mod ui;

use clap::Parser;
use classify::ClassifyArgs;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            text,
            file,
            interactive,
            json,
            config,
            model,
            verbose,
        } => {
            logging::init_logging(verbose);
            classify::execute(ClassifyArgs {
                text,
                file,
                interactive,
                json,
                config_path: config,
                model,
                verbose,
            })
        }
        Commands::Init { config, force } => {
            logging::init_logging(false);
            init::execute(config, force)
        }
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
