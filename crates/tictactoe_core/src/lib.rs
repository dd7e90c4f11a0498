//! Tic-tac-toe core: board, rules, turn control and score tracking.
//!
//! Everything here is pure, synchronous state. A front end drives a
//! [`Session`] with [`Input`]s and draws the [`GameView`] it returns; nothing
//! in this crate knows how it is displayed.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Evaluation, Input, Mark, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 1, 3, 4] {
//!     session.handle(Input::Activate(index));
//! }
//! let result = session.activate(6).unwrap();
//! assert!(matches!(result, Evaluation::Win { mark: Mark::X, .. }));
//! assert_eq!(*session.view().scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod navigation;
mod position;
mod round;
mod rules;
mod score;
mod session;
mod turn;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, ConclusionInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, RoundInvariants, ScoreConservationInvariant,
};
pub use navigation::{Direction, focus_target, navigate};
pub use position::Position;
pub use round::Round;
pub use rules::{Evaluation, Line, Outcome, WINNING_LINES, evaluate, is_tie, winning_line};
pub use score::{ScoreLedger, ScoreSnapshot};
pub use session::{Handled, Input, Session};
pub use turn::Turn;
pub use view::GameView;
pub use types::{Board, Cell, Mark};
