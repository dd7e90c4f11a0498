//! Command-line interface.

use crate::config::TuiConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Two-player tic-tac-toe in the terminal, with a running score.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional).
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    #[instrument(skip(config))]
    pub fn apply(&self, config: TuiConfig) -> TuiConfig {
        let mut config = config;
        if let Some(path) = &self.log_file {
            info!(path = %path.display(), "Overriding log file");
            config = config.with_log_file(path.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.apply(TuiConfig::default()), TuiConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["tictactoe", "--no-mouse", "--log-file", "game.log"]);
        let config = cli.apply(TuiConfig::default());
        assert!(!*config.mouse());
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
