use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use wineai_application::{ChatSession, SommelierUseCase};
use wineai_core::completion::GenerationParams;
use wineai_core::config::GenerationConfig;
use wineai_core::filter::FilterSelection;
use wineai_core::secret::ApiCredentials;
use wineai_infrastructure::{ConfigService, SecretServiceImpl, WineAiPaths, resolve_credentials};
use wineai_interaction::OpenAIApiClient;

mod commands;
mod helper;
mod logging;
mod render;

use commands::ReplCommand;
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "wineai")]
#[command(about = "WineAI - describe your mood and get a wine recommendation", long_about = None)]
struct Cli {
    /// Chat model to use (overrides secret.json, OPENAI_MODEL_NAME and config.toml)
    #[arg(long)]
    model: Option<String>,

    /// Configuration directory (default: ~/.config/wineai)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ===== Startup =====
    let paths = WineAiPaths::new(cli.config_dir.as_deref())?;
    let _log_guard = logging::init(&paths.logs_dir(), cli.verbose)?;
    tracing::info!("[Startup] Config directory: {}", paths.config_dir().display());

    let config = ConfigService::new(&paths).get_config().await?;

    let secret_service = SecretServiceImpl::new(&paths);
    let credentials =
        match resolve_credentials(&secret_service, |name| std::env::var(name).ok()).await {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::error!("[Startup] {}", e);
                render::print_missing_credentials(&paths.secret_file());
                return Ok(ExitCode::FAILURE);
            }
        };

    let model = select_model(cli.model.as_deref(), &credentials, &config.generation);
    tracing::info!(
        "[Startup] Using model {} (key from {})",
        model,
        credentials.source
    );

    let params = GenerationParams::from(&config.generation).with_model(model);
    let client = Arc::new(OpenAIApiClient::from_credentials(&credentials));
    let usecase = SommelierUseCase::new(client, params);

    let mut filters = FilterSelection::from_defaults(&config.filters);
    let mut session = ChatSession::new();

    run_repl(&usecase, &mut session, &mut filters).await?;

    tracing::info!("[Session] Ended {}", session.id());
    Ok(ExitCode::SUCCESS)
}

/// `--model` > secret.json / environment model name > config.toml (which
/// itself defaults to gpt-3.5-turbo).
fn select_model(
    cli_model: Option<&str>,
    credentials: &ApiCredentials,
    generation: &GenerationConfig,
) -> String {
    cli_model
        .map(str::to_string)
        .or_else(|| credentials.model_name.clone())
        .unwrap_or_else(|| generation.model.clone())
}

async fn run_repl(
    usecase: &SommelierUseCase,
    session: &mut ChatSession,
    filters: &mut FilterSelection,
) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::print_banner();
    render::print_filters(filters);
    println!();
    render::print_history(&session.history());
    render::print_presets();
    println!();

    // ===== Main REPL Loop =====
    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                render::print_warning(&e.to_string());
                continue;
            }
        };

        match command {
            ReplCommand::Quit => {
                println!("{}", "Cheers! Goodbye!".bright_green());
                break;
            }
            ReplCommand::Help => render::print_help(),
            ReplCommand::History => render::print_history(&session.history()),
            ReplCommand::Filters => render::print_filters(filters),
            ReplCommand::Grapes => render::print_grapes(filters.grape),
            ReplCommand::Regions => render::print_regions(filters.region),
            ReplCommand::Presets => render::print_presets(),
            ReplCommand::SetGrape(grape) => {
                filters.grape = grape;
                tracing::info!("[Filters] Grape set to {}", grape);
                render::print_filters(filters);
            }
            ReplCommand::SetRegion(region) => {
                filters.region = region;
                tracing::info!("[Filters] Region set to {}", region);
                render::print_filters(filters);
            }
            ReplCommand::SetPrice(price) => {
                filters.price = price;
                tracing::info!("[Filters] Price range set to {}", price);
                render::print_filters(filters);
            }
            ReplCommand::Preset(prompt) => {
                session.select_prompt(prompt);
                run_turn(usecase, session, filters, None).await?;
            }
            ReplCommand::Message(text) => {
                run_turn(usecase, session, filters, Some(&text)).await?;
            }
        }
    }

    Ok(())
}

async fn run_turn(
    usecase: &SommelierUseCase,
    session: &mut ChatSession,
    filters: &FilterSelection,
    typed_input: Option<&str>,
) -> Result<()> {
    let Some(user_text) = session.begin_turn(typed_input) else {
        return Ok(());
    };

    render::print_user(&user_text);
    render::print_thinking();

    let turn = usecase.complete_turn(session, filters).await?;
    render::print_turn(&turn);
    Ok(())
}
