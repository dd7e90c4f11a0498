//! Turn controller state machine.

use super::rules::{Evaluation, Outcome};
use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whose turn it is, or how the round ended.
///
/// ```text
/// ToMove(X) --NoResult--> ToMove(O) --NoResult--> ToMove(X) ...
///     |                       |
///     +---Win / Tie---> Concluded(outcome) <---Win / Tie---+
/// ```
///
/// `Concluded` is terminal; only a reset (a fresh [`Turn::default`]) leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Round in progress, `Mark` to move.
    ToMove(Mark),
    /// Round over.
    Concluded(Outcome),
}

impl Default for Turn {
    fn default() -> Self {
        Turn::ToMove(Mark::X)
    }
}

impl Turn {
    /// The mark to move, `None` once concluded.
    pub fn to_move(&self) -> Option<Mark> {
        match self {
            Turn::ToMove(mark) => Some(*mark),
            Turn::Concluded(_) => None,
        }
    }

    /// Whether the round still accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Turn::ToMove(_))
    }

    /// The outcome, once concluded.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Turn::ToMove(_) => None,
            Turn::Concluded(outcome) => Some(*outcome),
        }
    }

    /// Next state after an accepted move was evaluated.
    ///
    /// A concluded turn stays concluded.
    #[instrument]
    pub fn advance(self, evaluation: Evaluation) -> Turn {
        match (self, evaluation.outcome()) {
            (Turn::Concluded(outcome), _) => Turn::Concluded(outcome),
            (Turn::ToMove(_), Some(outcome)) => Turn::Concluded(outcome),
            (Turn::ToMove(mark), None) => Turn::ToMove(mark.opponent()),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::ToMove(mark) => write!(f, "Player {}'s turn", mark),
            Turn::Concluded(outcome) => write!(f, "{}", outcome),
        }
    }
}
