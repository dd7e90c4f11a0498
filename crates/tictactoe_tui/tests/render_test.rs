//! End-to-end checks through the public front-end API.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_core::{Cell, Mark, Position};
use tictactoe_tui::{App, TuiConfig, draw};

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    terminal.draw(|frame| cells = draw(frame, app)).unwrap();
    app.set_cell_areas(cells);
    cells
}

fn click(rect: Rect) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_clicks_on_rendered_cells_play_a_round() {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let mut app = App::new(&TuiConfig::default());
    let cells = render(&mut terminal, &mut app);

    for index in [4, 0, 2, 6, 3, 5, 1, 7, 8] {
        app.handle_event(&click(cells[index]));
        render(&mut terminal, &mut app);
    }

    let view = app.view();
    assert!(!view.is_active());
    assert_eq!(view.status_message(), "Game ended in a tie!");
    assert_eq!(*view.scores().tie(), 1);
}

#[test]
fn test_keyboard_only_round() {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let mut app = App::new(&TuiConfig::default());
    render(&mut terminal, &mut app);

    let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    // X: top row via arrows, O: middle row via digits
    let script = [
        key(KeyCode::Right),
        key(KeyCode::Enter),
        key(KeyCode::Char('4')),
        key(KeyCode::Up),
        key(KeyCode::Right),
        key(KeyCode::Enter),
        key(KeyCode::Char('5')),
        key(KeyCode::Up),
        key(KeyCode::Right),
        key(KeyCode::Char(' ')),
    ];
    for event in &script {
        app.handle_event(event);
        render(&mut terminal, &mut app);
    }

    let view = app.view();
    assert_eq!(view.status_message(), "Player X wins!");
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(view.cell(pos), Cell::Occupied(Mark::X));
        assert!(view.is_winning(pos));
    }
    assert_eq!(*view.scores().x(), 1);
}
