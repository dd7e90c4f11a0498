//! History consistency: the board is exactly the replay of the history.

use super::Invariant;
use crate::{Cell, Round};

/// Invariant: every accepted move is on the board and nothing else is.
///
/// Together with the fact that `place` only fills empty cells, this means
/// marks are never overwritten or removed within a round.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        let occupied = board.cells().iter().filter(|c| **c != Cell::Empty).count();

        occupied == round.history().len()
            && round
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Cell::Occupied(mv.mark))
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position};

    #[test]
    fn test_holds_after_moves() {
        let mut round = Round::new();
        round.place_mark(2, Mark::X).unwrap();
        round.place_mark(6, Mark::O).unwrap();
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_phantom_history_entry_violates() {
        let mut round = Round::new();
        round.history.push(Move::new(Mark::X, Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
