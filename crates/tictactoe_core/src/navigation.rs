//! Keyboard focus movement between cells.

use super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left, wrapping within the row.
    Left,
    /// One column right, wrapping within the row.
    Right,
}

/// Moves focus from `current` one step in `direction`.
///
/// Left and right wrap around inside the current row. Up and down stop at the
/// grid edge and return `None` instead of wrapping.
#[instrument]
pub fn navigate(current: Position, direction: Direction) -> Option<Position> {
    let index = current.to_index();
    let next = match direction {
        Direction::Up => index.checked_sub(3)?,
        Direction::Down => index + 3,
        Direction::Left if current.col() == 0 => index + 2,
        Direction::Left => index - 1,
        Direction::Right if current.col() == 2 => index - 2,
        Direction::Right => index + 1,
    };
    Position::from_index(next)
}

/// Resolves where focus lands after an arrow key.
///
/// With nothing focused the first cell takes focus. When `navigate` has no
/// target, focus stays put.
pub fn focus_target(focused: Option<Position>, direction: Direction) -> Position {
    match focused {
        None => Position::TopLeft,
        Some(current) => navigate(current, direction).unwrap_or(current),
    }
}
