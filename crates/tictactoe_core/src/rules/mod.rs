//! Game rules.
//!
//! Pure functions over a [`Board`]: the same board always evaluates to the
//! same result, and evaluation never mutates anything.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{Line, WINNING_LINES, winning_line};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `mark` completed `line`.
    Win {
        /// The completed line.
        line: Line,
        /// The mark occupying it.
        mark: Mark,
    },
    /// Board filled with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { mark, .. } => write!(f, "Player {} wins!", mark),
            Outcome::Tie => write!(f, "Game ended in a tie!"),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// Play continues.
    NoResult,
    /// `mark` completed `line`.
    Win {
        /// The completed line.
        line: Line,
        /// The mark occupying it.
        mark: Mark,
    },
    /// Board is full with no completed line.
    Tie,
}

impl Evaluation {
    /// The outcome, if the board is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Evaluation::NoResult => None,
            Evaluation::Win { line, mark } => Some(Outcome::Win { line, mark }),
            Evaluation::Tie => Some(Outcome::Tie),
        }
    }
}

/// Evaluates a board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first completed one
/// wins. With no completed line a full board is a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((line, mark)) = winning_line(board) {
        return Evaluation::Win { line, mark };
    }
    if board.is_full() {
        return Evaluation::Tie;
    }
    Evaluation::NoResult
}
