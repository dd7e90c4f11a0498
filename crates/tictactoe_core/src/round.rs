//! A single round: board, turn and move history.

use super::action::{Move, MoveError};
use super::rules::{self, Evaluation};
use super::turn::Turn;
use super::{Board, Mark};
use tracing::{debug, instrument};

/// One play-through from an empty board to a win or tie.
///
/// The board only changes through [`Round::place_mark`], and only while the
/// round is active. A reset replaces the whole round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) turn: Turn,
    pub(crate) history: Vec<Move>,
}

impl Round {
    /// Creates a round with an empty board and X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at a raw board index.
    ///
    /// On success the board is evaluated and the turn advanced; the
    /// evaluation is returned so the caller can settle the score.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundConcluded`] after a win or tie,
    /// [`MoveError::WrongTurn`] if `mark` is not the player to move, and the
    /// board's own [`MoveError::OutOfRange`] / [`MoveError::CellOccupied`].
    /// A rejected call leaves the round unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<Evaluation, MoveError> {
        let to_move = self.turn.to_move().ok_or(MoveError::RoundConcluded)?;
        if mark != to_move {
            return Err(MoveError::WrongTurn(mark));
        }

        let position = self.board.place(index, mark)?;
        self.history.push(Move::new(mark, position));

        let evaluation = rules::evaluate(&self.board);
        self.turn = self.turn.advance(evaluation);
        debug!(%position, ?evaluation, "Mark placed");

        Ok(evaluation)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Whether the round still accepts moves.
    pub fn is_active(&self) -> bool {
        self.turn.is_active()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
