use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spam-detect")]
#[command(
    author,
    version,
    about = "Classify email content as spam or not spam with a hosted Gemini model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify email content and show the verdict with its reason
    Classify {
        /// Email content to classify
        #[clap(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the email content from a file
        #[clap(short, long)]
        file: Option<String>,

        /// Compose emails in your editor and classify them one after another
        #[clap(short, long, default_value_t = false, conflicts_with_all = ["text", "file"])]
        interactive: bool,

        /// Print the prediction as JSON
        #[clap(long, default_value_t = false)]
        json: bool,

        /// Configuration file path (defaults to ./spam-detect.toml, then the user config directory)
        #[clap(short, long)]
        config: Option<String>,

        /// Model to use instead of the configured one
        #[clap(short, long)]
        model: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Create a default configuration file
    Init {
        /// Where to write the configuration file
        #[clap(short, long, default_value = "spam-detect.toml")]
        config: String,

        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
