//! Win detection.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Raw board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines in evaluation order.
pub const WINNING_LINES: [Line; 8] = {
    use crate::Position::*;
    [
        // Rows
        Line([TopLeft, TopCenter, TopRight]),
        Line([MiddleLeft, Center, MiddleRight]),
        Line([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line([TopLeft, MiddleLeft, BottomLeft]),
        Line([TopCenter, Center, BottomCenter]),
        Line([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line([TopLeft, Center, BottomRight]),
        Line([TopRight, Center, BottomLeft]),
    ]
};

/// Finds the first completed line in catalog order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((line, mark))
            }
            _ => None,
        }
    })
}
