//! Stateless rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, GameView, Mark, Position};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // Scores
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Focused cell label
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], &view);
    let cells = draw_board(frame, chunks[2], &view, app.focus(), app.show_cell_numbers());

    let status_color = if view.is_active() { Color::Yellow } else { Color::Green };
    let status = Paragraph::new(view.status_message())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let label = match app.focus() {
        Some(pos) => view.cell_label(pos),
        None => "No cell focused (use the arrow keys)".to_string(),
    };
    let focused = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Focused cell"));
    frame.render_widget(focused, chunks[4]);

    let help = Paragraph::new("Arrows: move | Enter/Space: play | 1-9: play cell | r: new round | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    cells
}

fn draw_scores(frame: &mut Frame, area: Rect, view: &GameView) {
    let scores = view.scores();
    let line = Line::from(vec![
        Span::styled(format!("X: {}", scores.x()), mark_style(Mark::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", scores.o()), mark_style(Mark::O)),
        Span::raw("   "),
        Span::raw(format!("Ties: {}", scores.tie())),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    focus: Option<Position>,
    numbers: bool,
) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            cells[index] = cell_area;
            if let Some(pos) = Position::from_index(index) {
                draw_cell(frame, cell_area, view, pos, focus == Some(pos), numbers);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, pos: Position, focused: bool, numbers: bool) {
    let (symbol, base_style) = match view.cell(pos) {
        Cell::Empty if numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let mut style = base_style;
    if view.is_winning(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(symbol), Line::raw("")])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> (String, [Rect; 9]) {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        let mut cells = [Rect::default(); 9];
        terminal.draw(|f| cells = draw(f, app)).unwrap();
        (buffer_text(terminal.backend().buffer()), cells)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(&TuiConfig::default());
        let (text, _) = render(&app);
        assert!(text.contains("Player X's turn"));
        assert!(text.contains("X: 0"));
        assert!(text.contains("Ties: 0"));
        assert!(text.contains("No cell focused"));
    }

    #[test]
    fn test_cells_are_laid_out_row_major() {
        let app = App::new(&TuiConfig::default());
        let (_, cells) = render(&app);
        assert!(cells.iter().all(|r| r.width == CELL_WIDTH && r.height == CELL_HEIGHT));
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
        assert_eq!(cells[4].x, cells[1].x);
    }

    #[test]
    fn test_win_shows_status_score_and_label() {
        let mut app = App::new(&TuiConfig::default());
        for pos in [0, 1, 3, 4, 6] {
            app.apply(Action::Activate(Position::from_index(pos).unwrap()));
        }
        let (text, _) = render(&app);
        assert!(text.contains("Player X wins!"));
        assert!(text.contains("X: 1"));
        assert!(text.contains("Bottom-left: X, winning"));
    }
}
