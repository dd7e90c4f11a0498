//! Application state and event loop.

use crate::config::TuiConfig;
use crate::input::{self, Action};
use crate::ui;
use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tictactoe_core::{GameView, Handled, Input, Position, Session, focus_target};
use tracing::{debug, info, instrument};

/// Front-end state wrapped around the game [`Session`].
///
/// The session is the only game state; the app adds keyboard focus and the
/// cell areas from the last render, which mouse clicks are tested against.
#[derive(Debug)]
pub struct App {
    session: Session,
    focus: Option<Position>,
    cell_areas: Option<[Rect; 9]>,
    mouse: bool,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: Session::new(),
            focus: None,
            cell_areas: None,
            mouse: *config.mouse(),
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Applies one user action.
    ///
    /// Returns the session's report when the action reached the game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Option<Handled> {
        match action {
            Action::Navigate(direction) => {
                self.focus = Some(focus_target(self.focus, direction));
                None
            }
            Action::ActivateFocused => {
                let Some(pos) = self.focus else {
                    debug!("Activation with no focused cell");
                    return None;
                };
                Some(self.activate(pos))
            }
            Action::Activate(pos) => {
                self.focus = Some(pos);
                Some(self.activate(pos))
            }
            Action::Reset => Some(self.session.handle(Input::Reset)),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        }
    }

    /// Maps a terminal event and applies it.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) -> Option<Handled> {
        let action = match event {
            Event::Key(key) => input::map_key(*key),
            Event::Mouse(mouse) if self.mouse => self
                .cell_areas
                .as_ref()
                .and_then(|cells| input::map_mouse(*mouse, cells)),
            _ => None,
        }?;
        self.apply(action)
    }

    fn activate(&mut self, pos: Position) -> Handled {
        let handled = self.session.handle(Input::Activate(pos.to_index()));
        if let Handled::Ignored(reason) = handled {
            debug!(%reason, "Activation ignored");
        }
        handled
    }

    /// Current game view.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// The focused cell, if any.
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Whether empty cells show their digit key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Records where the cells were drawn.
    pub fn set_cell_areas(&mut self, cells: [Rect; 9]) {
        self.cell_areas = Some(cells);
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Runs the draw/read loop until the user quits.
///
/// Each event is handled to completion before the next one is read.
#[instrument(skip_all)]
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting game loop");

    while !app.should_quit() {
        let mut cells = None;
        terminal.draw(|frame| cells = Some(ui::draw(frame, &*app)))?;
        if let Some(cells) = cells {
            app.set_cell_areas(cells);
        }

        let event = event::read()?;
        if let Some(handled) = app.handle_event(&event) {
            debug!(?handled, status = %app.view().status_message(), "Input processed");
        }
    }

    info!(scores = ?app.view().scores(), "Game loop finished");
    Ok(())
}
