//! Werewolf adventure binary.
//!
//! Loads `.env`, reads configuration from the environment, installs file
//! logging and runs the menu loop on stdin/stdout.
use std::io;
use std::sync::Arc;

use anyhow::Result;
use runtime::FileSaveRepository;
use werewolf_client::{App, CliConfig, Console, load_content, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging(config.runtime.session_id.as_deref())?;

    tracing::info!("Starting werewolf client");
    tracing::info!("Seed: {:?}", config.runtime.seed);
    tracing::info!("Save dir: {}", config.runtime.save_dir.display());

    let content = load_content(&config.runtime)?;
    let repository = Arc::new(FileSaveRepository::new(&config.runtime.save_dir)?);

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.prompt.clone());
    App::start(content, &config, repository, console)?.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
