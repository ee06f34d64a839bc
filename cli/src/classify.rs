use crate::error::{CliError, Result};
use crate::input::{self, InputSource};
use crate::progress::LoadingIndicator;
use crate::render;
use crate::settings;
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Confirm};
use spam_classifier::{GeminiClient, InteractionController, SpamClassifier};
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    pub text: Option<String>,
    pub file: Option<String>,
    pub interactive: bool,
    pub json: bool,
    pub config_path: Option<String>,
    pub model: Option<String>,
    pub verbose: bool,
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: ClassifyArgs) -> Result<()> {
    let config = settings::load_config(args.config_path.as_deref(), args.model.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    // A missing credential ends the run before any input is read
    let client = GeminiClient::from_env(&config)?;

    if args.verbose {
        ui::note(&format!("Model: {}", config.api.model));
        ui::note(&format!("Endpoint: {}", config.endpoint()));
    }

    let indicator = LoadingIndicator::new("Analyzing email...");
    let mut controller =
        InteractionController::new(client).with_transition_callback(indicator.observe());

    let source = input::resolve_source(
        args.text.clone(),
        args.file.clone(),
        args.interactive,
        atty::is(atty::Stream::Stdin),
    );

    match source {
        InputSource::Editor => {
            run_interactive(&mut controller, &indicator, &args, &config.api.model).await
        }
        source => {
            let content = input::read_input(&source)?;
            let output = run_once(&mut controller, &content, args.json, &config.api.model).await?;
            println!("{output}");
            if args.verbose {
                if let Some(elapsed) = indicator.last_duration() {
                    ui::note(&format!("Classified in {elapsed}"));
                }
            }
            Ok(())
        }
    }
}

/// Submit one email and render the outcome; an error state becomes `Err`
async fn run_once<C: SpamClassifier>(
    controller: &mut InteractionController<C>,
    content: &str,
    json: bool,
    model: &str,
) -> Result<String> {
    let state = controller.submit(content).await;
    render::render_state(state, json, model)
}

async fn run_interactive<C: SpamClassifier>(
    controller: &mut InteractionController<C>,
    indicator: &LoadingIndicator,
    args: &ClassifyArgs,
    model: &str,
) -> Result<()> {
    ui::heading("AI Spam Mail Detection");
    ui::note("Write or paste the email in your editor, then save and close it.");

    loop {
        let content = input::compose_in_editor()?;

        match run_once(controller, &content, args.json, model).await {
            Ok(output) => println!("\n{output}\n"),
            Err(CliError::Prediction(message)) => ui::error(&message),
            Err(err) => return Err(err),
        }

        if args.verbose {
            if let Some(elapsed) = indicator.last_duration() {
                ui::note(&format!("Last request took {elapsed}"));
            }
        }

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Classify another email?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        controller.reset();
    }

    ui::success("Done");
    Ok(())
}
