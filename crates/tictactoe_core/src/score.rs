//! Score ledger kept across rounds.

use super::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Point-in-time copy of the ledger counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Getters, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Tied rounds.
    tie: u32,
}

impl ScoreSnapshot {
    /// Creates a snapshot from raw counts.
    pub fn new(x: u32, o: u32, tie: u32) -> Self {
        Self { x, o, tie }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Number of completed rounds.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.tie
    }
}

/// Win and tie counts for the lifetime of a session.
///
/// Counts only ever go up. Starting a new round leaves them untouched and
/// there is deliberately no way to clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    counts: ScoreSnapshot,
}

impl ScoreLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a round won by `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.counts.x += 1,
            Mark::O => self.counts.o += 1,
        }
        debug!(?mark, total = self.counts.total(), "Win recorded");
    }

    /// Records a tied round.
    #[instrument(skip(self))]
    pub fn record_tie(&mut self) {
        self.counts.tie += 1;
        debug!(total = self.counts.total(), "Tie recorded");
    }

    /// Current counts.
    pub fn snapshot(&self) -> ScoreSnapshot {
        self.counts
    }

    /// Number of completed rounds.
    pub fn total(&self) -> u32 {
        self.counts.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_zero() {
        assert_eq!(ScoreLedger::new().snapshot(), ScoreSnapshot::new(0, 0, 0));
    }

    #[test]
    fn test_records_accumulate() {
        let mut ledger = ScoreLedger::new();
        ledger.record_win(Mark::X);
        ledger.record_win(Mark::X);
        ledger.record_win(Mark::O);
        ledger.record_tie();

        let snapshot = ledger.snapshot();
        assert_eq!(*snapshot.x(), 2);
        assert_eq!(*snapshot.o(), 1);
        assert_eq!(*snapshot.tie(), 1);
        assert_eq!(snapshot.wins(Mark::O), 1);
        assert_eq!(ledger.total(), 4);
    }
}
