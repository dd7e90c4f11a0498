//! Score conservation: one ledger entry per concluded round.

use super::Invariant;
use crate::Session;

/// Invariant: ledger counts sum to the number of concluded rounds.
pub struct ScoreConservationInvariant;

impl Invariant<Session> for ScoreConservationInvariant {
    fn holds(session: &Session) -> bool {
        session.ledger().total() == session.rounds_completed()
    }

    fn description() -> &'static str {
        "Score counts sum to completed rounds"
    }
}
