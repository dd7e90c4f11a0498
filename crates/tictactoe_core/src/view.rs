//! Read-only snapshot handed to the presentation layer.

use super::rules::Line;
use super::score::ScoreSnapshot;
use super::turn::Turn;
use super::{Cell, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game after an input.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// The nine cells, row-major.
    cells: [Cell; 9],
    /// Player to move, or the round's outcome.
    turn: Turn,
    /// Score tally across rounds.
    scores: ScoreSnapshot,
}

impl GameView {
    pub(crate) fn new(cells: [Cell; 9], turn: Turn, scores: ScoreSnapshot) -> Self {
        Self { cells, turn, scores }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Whether the round still accepts moves.
    pub fn is_active(&self) -> bool {
        self.turn.is_active()
    }

    /// The line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.turn.outcome().and_then(|o| o.line())
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }

    /// Status line text.
    pub fn status_message(&self) -> String {
        self.turn.to_string()
    }

    /// Accessibility label for a cell, e.g. `"Center: X, winning"`.
    pub fn cell_label(&self, pos: Position) -> String {
        let occupancy = match self.cell(pos) {
            Cell::Empty => "empty".to_string(),
            Cell::Occupied(mark) => mark.to_string(),
        };
        if self.is_winning(pos) {
            format!("{}: {}, winning", pos.label(), occupancy)
        } else {
            format!("{}: {}", pos.label(), occupancy)
        }
    }
}
