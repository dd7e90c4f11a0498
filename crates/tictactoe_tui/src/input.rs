//! Maps terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{Direction, Position};
use tracing::instrument;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move keyboard focus.
    Navigate(Direction),
    /// Activate the focused cell (Enter or Space).
    ActivateFocused,
    /// Activate a specific cell (mouse click or digit key).
    Activate(Position),
    /// Start a new round.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action.
///
/// Release and repeat events yield `None`, as do unbound keys.
#[instrument]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateFocused),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Activate),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click on a cell to an activation.
///
/// Other buttons are ignored so that a right click never plays a mark.
#[instrument(skip(cells))]
pub fn map_mouse(mouse: MouseEvent, cells: &[Rect; 9]) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(cells, mouse.column, mouse.row).map(Action::Activate)
        }
        _ => None,
    }
}

/// Finds the cell under a terminal coordinate.
pub fn hit_test(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    cells
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn grid() -> [Rect; 9] {
        std::array::from_fn(|i| Rect::new((i % 3) as u16 * 10, (i / 3) as u16 * 4, 9, 3))
    }

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::Navigate(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Left)), Some(Action::Navigate(Direction::Left)));
    }

    #[test]
    fn test_enter_and_space_activate_focused() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::ActivateFocused));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Action::ActivateFocused));
    }

    #[test]
    fn test_digits_activate_cells() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(Action::Activate(Position::TopLeft)));
        assert_eq!(map_key(press(KeyCode::Char('9'))), Some(Action::Activate(Position::BottomRight)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_reset_and_quit() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_hit_test() {
        let cells = grid();
        assert_eq!(hit_test(&cells, 0, 0), Some(Position::TopLeft));
        assert_eq!(hit_test(&cells, 15, 5), Some(Position::Center));
        assert_eq!(hit_test(&cells, 28, 10), Some(Position::BottomRight));
        // Gap between columns.
        assert_eq!(hit_test(&cells, 9, 0), None);
        assert_eq!(hit_test(&cells, 100, 100), None);
    }

    #[test]
    fn test_only_left_click_activates() {
        let cells = grid();
        let click = |kind| MouseEvent {
            kind,
            column: 12,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_mouse(click(MouseEventKind::Down(MouseButton::Left)), &cells),
            Some(Action::Activate(Position::TopCenter))
        );
        assert_eq!(map_mouse(click(MouseEventKind::Down(MouseButton::Right)), &cells), None);
        assert_eq!(map_mouse(click(MouseEventKind::Moved), &cells), None);
    }
}
