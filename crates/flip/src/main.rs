//! Flip - terminal memory game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use flip::{Cli, Command, FlipConfig, RULES};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            grid_size,
            seed,
            config,
        } => run_play(grid_size, seed, config).await,
        Command::Rules => {
            println!("{RULES}");
            Ok(())
        }
    }
}

/// Loads configuration, installs logging and runs the TUI.
async fn run_play(grid_size: Option<usize>, seed: Option<u64>, config: PathBuf) -> Result<()> {
    let config = FlipConfig::load(&config)
        .with_context(|| format!("Failed to load {}", config.display()))?
        .with_overrides(grid_size, seed);
    config.validate()?;

    init_logging(config.log_file())?;
    info!(?config, "Starting flip");

    flip::tui::run(config).await
}

/// Sends tracing output to a file so it does not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
