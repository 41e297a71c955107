use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use gol_core::{Command, Engine};

/// Terminal columns used to draw one cell.
pub const CELL_WIDTH: u16 = 2;

/// State of the terminal front end.
pub struct TuiApp {
    pub engine: Engine,
    pub should_quit: bool,
    /// Screen area the cells were last drawn into.
    pub grid_area: Rect,
    /// Screen area of the help popup, if it was drawn.
    pub help_area: Option<Rect>,
}

impl TuiApp {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            should_quit: false,
            grid_area: Rect::default(),
            help_area: None,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            code => {
                if let Some(command) = command_for_key(code) {
                    self.engine.apply(command);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some((row, col)) = self.cell_at(mouse.column, mouse.row) {
            self.engine.apply(Command::ToggleCell { row, col });
        }
    }

    /// Map a terminal position to grid coordinates.
    ///
    /// Positions outside the drawn cells, or under the help popup, map to
    /// nothing. A cell inside the area may still lie past a small grid's
    /// edge; the engine ignores those.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(isize, isize)> {
        let position = Position::new(column, row);
        if !self.grid_area.contains(position)
            || self.help_area.is_some_and(|help| help.contains(position))
        {
            return None;
        }
        let dx = column - self.grid_area.x;
        let dy = row - self.grid_area.y;
        Some((dy as isize, (dx / CELL_WIDTH) as isize))
    }
}

/// Key bindings shared with the graphical front end.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Enter => Some(Command::ToggleRun),
        KeyCode::Up => Some(Command::IncreaseSpeed),
        KeyCode::Down => Some(Command::DecreaseSpeed),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Command::ToggleHelp),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Step),
        _ => None,
    }
}
