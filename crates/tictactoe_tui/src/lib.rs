//! Terminal front end for tic-tac-toe.
//!
//! Routes keyboard and mouse input into a [`tictactoe_core::Session`] and
//! renders the resulting view with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{App, run};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, hit_test, map_key, map_mouse};
pub use terminal::{TerminalGuard, setup_terminal};
pub use ui::draw;
