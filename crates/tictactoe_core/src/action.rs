//! Moves and move rejection reasons.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a placement was rejected.
///
/// Rejections are expected user interaction (clicking a filled cell, playing
/// after the round ended) and are treated as no-ops by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index is not a board cell.
    #[display("Index {_0} is outside the board (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The round has concluded; only a reset accepts input.
    #[display("Round is already over")]
    RoundConcluded,

    /// The mark is not the active player's.
    #[display("It's not {_0}'s turn")]
    WrongTurn(#[error(not(source))] Mark),
}
