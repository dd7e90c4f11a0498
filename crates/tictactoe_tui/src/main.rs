//! Tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{App, Cli, TuiConfig, run, setup_terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(TuiConfig::load(&cli.config)?);

    initialize_tracing(&config)?;
    info!(?config, "Starting tic-tac-toe");

    let (mut terminal, _guard) = setup_terminal(*config.mouse()).context("Failed to set up terminal")?;
    let mut app = App::new(&config);
    run(&mut terminal, &mut app)
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
