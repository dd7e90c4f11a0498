//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Mark, Round};

/// Invariant: players alternate, X first.
///
/// While the round is active, the player to move is determined by the number
/// of moves played so far.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if history.first().is_some_and(|mv| mv.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match round.turn().to_move() {
            Some(mark) => {
                let expected = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
                mark == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
