//! Conclusion invariant: active exactly while the board is undecided.

use super::Invariant;
use crate::Round;
use crate::rules::{self, Evaluation};

/// Invariant: the round is active iff no line is complete and an empty cell
/// remains, and a concluded round records the board's actual outcome.
pub struct ConclusionInvariant;

impl Invariant<Round> for ConclusionInvariant {
    fn holds(round: &Round) -> bool {
        let evaluation = rules::evaluate(round.board());
        match round.turn().outcome() {
            None => evaluation == Evaluation::NoResult,
            Some(outcome) => evaluation.outcome() == Some(outcome),
        }
    }

    fn description() -> &'static str {
        "Round is active exactly while the board is undecided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Turn};

    #[test]
    fn test_holds_for_won_round() {
        let mut round = Round::new();
        for (index, mark) in [(0, Mark::X), (1, Mark::O), (3, Mark::X), (4, Mark::O), (6, Mark::X)] {
            round.place_mark(index, mark).unwrap();
        }
        assert!(!round.is_active());
        assert!(ConclusionInvariant::holds(&round));
    }

    #[test]
    fn test_active_round_with_winning_board_violates() {
        let mut round = Round::new();
        for (index, mark) in [(0, Mark::X), (1, Mark::O), (3, Mark::X), (4, Mark::O), (6, Mark::X)] {
            round.place_mark(index, mark).unwrap();
        }
        round.turn = Turn::ToMove(Mark::O);
        assert!(!ConclusionInvariant::holds(&round));
    }
}
