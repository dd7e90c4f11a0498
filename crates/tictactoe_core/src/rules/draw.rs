//! Tie detection.

use super::super::Board;
use super::win::winning_line;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn fill(board: &mut Board, marks: [Mark; 9]) {
        for (index, mark) in marks.into_iter().enumerate() {
            board.place(index, mark).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_tie_detection() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X O X / X O O / O X X
        fill(&mut board, [X, O, X, X, O, O, O, X, X]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        use Mark::{O, X};
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(!is_tie(&board));
    }
}
