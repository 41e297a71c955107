//! Keyboard and mouse polling.
//!
//! macroquad's `is_key_pressed` and `is_mouse_button_pressed` already fire
//! once per press, which gives the engine its edge-triggered commands.

use gol_core::Command;
use macroquad::prelude::*;

/// Keys bound to engine commands.
const BINDINGS: [(KeyCode, Command); 6] = [
    (KeyCode::Enter, Command::ToggleRun),
    (KeyCode::Up, Command::IncreaseSpeed),
    (KeyCode::Down, Command::DecreaseSpeed),
    (KeyCode::R, Command::Reset),
    (KeyCode::F1, Command::ToggleHelp),
    (KeyCode::N, Command::Step),
];

/// Map a pixel position to `(row, col)` for cells of `cell_size` pixels.
///
/// Positions left of or above the grid give negative indices; the engine
/// ignores anything outside the grid.
pub fn cell_at(x: f32, y: f32, cell_size: f32) -> (isize, isize) {
    let row = (y / cell_size).floor() as isize;
    let col = (x / cell_size).floor() as isize;
    (row, col)
}

/// Commands triggered this frame, in binding order, then the mouse edit.
pub fn poll_commands(cell_size: f32) -> Vec<Command> {
    let mut commands: Vec<Command> = BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        let (row, col) = cell_at(x, y, cell_size);
        commands.push(Command::ToggleCell { row, col });
    }
    commands
}

/// Check whether the user asked to close the window.
pub fn quit_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}
