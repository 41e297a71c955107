//! Drawing of the grid, gridlines, help overlay, and status line.

use gol_core::Engine;
use macroquad::prelude::*;

use crate::theme::{self, FONT_SIZE, TEXT_X, WINDOW_SIZE};

/// Help lines shown while the overlay is visible.
pub const HELP_LINES: [&str; 5] = [
    "    <ENTER>: pause/resume",
    "<UP>/<DOWN>: slower/faster",
    "        <R>: reset and pause",
    "        <N>: step while paused",
    "       <F1>: hide/show this help",
];

/// Draw one frame of the simulation.
pub fn draw(engine: &Engine) {
    clear_background(theme::BACKGROUND);

    let grid = engine.grid();
    let n = grid.dimension();
    let cell = theme::cell_size(n);

    for (row, col) in grid.live_cells() {
        draw_rectangle(
            col as f32 * cell,
            row as f32 * cell,
            cell,
            cell,
            theme::ALIVE,
        );
    }

    for i in 0..n {
        let offset = i as f32 * cell;
        draw_line(offset, 0.0, offset, WINDOW_SIZE, 1.0, theme::GRIDLINE);
        draw_line(0.0, offset, WINDOW_SIZE, offset, 1.0, theme::GRIDLINE);
    }

    if engine.help_visible() {
        draw_help(engine);
    }
}

fn draw_help(engine: &Engine) {
    for (i, line) in HELP_LINES.iter().enumerate() {
        let y = 20.0 * (i as f32 + 1.0);
        draw_text(line, TEXT_X, y, FONT_SIZE, theme::TEXT);
    }

    let state = if engine.is_running() { "running" } else { "paused" };
    let status = format!(
        "{} Generation {} ({state}).",
        engine.status_line(),
        engine.generation()
    );
    draw_text(&status, TEXT_X, screen_height() - 40.0, FONT_SIZE, theme::TEXT);
}
