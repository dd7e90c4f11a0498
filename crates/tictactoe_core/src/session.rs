//! Session controller: the single owner of game and score state.

use super::action::MoveError;
use super::invariants::{Invariant, InvariantSet, RoundInvariants, ScoreConservationInvariant};
use super::round::Round;
use super::rules::Evaluation;
use super::score::ScoreLedger;
use super::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Input delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A cell was activated (click, Enter/Space, digit key).
    Activate(usize),
    /// Start a new round.
    Reset,
}

/// What happened to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The move was accepted and evaluated.
    Accepted(Evaluation),
    /// The input was a no-op.
    Ignored(MoveError),
    /// A new round started.
    Reset,
}

/// Owns the current [`Round`] and the [`ScoreLedger`].
///
/// Inputs are processed one at a time through `&mut self`, so the legality
/// check and the mutation it guards can never interleave with another input.
#[derive(Debug, Clone, Default)]
pub struct Session {
    round: Round,
    ledger: ScoreLedger,
    rounds_completed: u32,
}

impl Session {
    /// Creates a session with a fresh round and an empty ledger.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one input and reports what happened.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Handled {
        match input {
            Input::Activate(index) => match self.activate(index) {
                Ok(evaluation) => Handled::Accepted(evaluation),
                Err(reason) => Handled::Ignored(reason),
            },
            Input::Reset => {
                self.reset();
                Handled::Reset
            }
        }
    }

    /// Plays the active player's mark at `index`.
    ///
    /// When the move decides the round the ledger is updated before this
    /// returns. Rejected activations change nothing.
    #[instrument(skip(self), fields(turn = %self.round.turn()))]
    pub fn activate(&mut self, index: usize) -> Result<Evaluation, MoveError> {
        let Some(mark) = self.round.turn().to_move() else {
            debug!("Ignoring activation after round concluded");
            return Err(MoveError::RoundConcluded);
        };

        let evaluation = self.round.place_mark(index, mark).inspect_err(|reason| {
            debug!(%reason, "Ignoring activation");
        })?;

        // Counted from round state, separately from the ledger writes.
        if !self.round.is_active() {
            self.rounds_completed += 1;
        }

        match evaluation {
            Evaluation::Win { mark, line } => {
                self.ledger.record_win(mark);
                info!(%mark, cells = ?line.indices(), "Round won");
            }
            Evaluation::Tie => {
                self.ledger.record_tie();
                info!("Round tied");
            }
            Evaluation::NoResult => {}
        }

        self.check_invariants();
        Ok(evaluation)
    }

    /// Starts a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.round = Round::new();
        info!(scores = ?self.ledger.snapshot(), "Round reset");
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.round.board().cells(),
            self.round.turn(),
            self.ledger.snapshot(),
        )
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the ledger.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Rounds concluded since the session started.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    fn check_invariants(&self) {
        let round_check = RoundInvariants::check_all(&self.round);
        if let Err(violations) = &round_check {
            warn!(?violations, "Round invariant violated");
        }
        debug_assert!(round_check.is_ok(), "round invariants violated: {round_check:?}");

        let conserved = ScoreConservationInvariant::holds(self);
        if !conserved {
            warn!(
                rounds = self.rounds_completed,
                total = self.ledger.total(),
                "{}",
                ScoreConservationInvariant::description()
            );
        }
        debug_assert!(conserved, "{}", ScoreConservationInvariant::description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_handle_activate_and_reset() {
        let mut session = Session::new();
        assert_eq!(session.handle(Input::Activate(4)), Handled::Accepted(Evaluation::NoResult));
        assert_eq!(session.view().cell(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(session.handle(Input::Reset), Handled::Reset);
        assert_eq!(session.view().cell(Position::Center), Cell::Empty);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = Session::new();
        session.activate(0).unwrap();
        assert_eq!(
            session.handle(Input::Activate(0)),
            Handled::Ignored(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(session.round().turn().to_move(), Some(Mark::O));
    }

    #[test]
    fn test_rounds_completed_counts_conclusions_not_moves() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4] {
            session.activate(index).unwrap();
            assert_eq!(session.rounds_completed(), 0);
        }
        session.activate(2).unwrap();
        assert_eq!(session.rounds_completed(), 1);

        assert_eq!(session.activate(8), Err(MoveError::RoundConcluded));
        assert_eq!(session.rounds_completed(), 1);
        assert!(ScoreConservationInvariant::holds(&session));
    }

    #[test]
    fn test_score_conservation_detects_double_record() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4, 2] {
            session.activate(index).unwrap();
        }
        assert!(ScoreConservationInvariant::holds(&session));

        session.ledger.record_win(Mark::X);
        assert!(!ScoreConservationInvariant::holds(&session));
    }

    #[test]
    fn test_score_conservation_detects_unrecorded_round() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4] {
            session.activate(index).unwrap();
        }
        // Conclude the round without going through the ledger.
        session.round.place_mark(2, Mark::X).unwrap();
        session.rounds_completed += 1;
        assert!(!ScoreConservationInvariant::holds(&session));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut session = Session::new();
        assert_eq!(
            session.handle(Input::Activate(42)),
            Handled::Ignored(MoveError::OutOfRange(42))
        );
        assert_eq!(session.round(), &Round::new());
    }
}
