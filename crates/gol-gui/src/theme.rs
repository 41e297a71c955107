//! Colors and layout constants.

use macroquad::prelude::*;

/// Window width and height in pixels.
pub const WINDOW_SIZE: f32 = 600.0;

/// Font size for the help overlay and status line.
pub const FONT_SIZE: f32 = 20.0;
/// Left margin of overlay text.
pub const TEXT_X: f32 = 20.0;

/// Screen background.
pub const BACKGROUND: Color = BLACK;
/// Fill for live cells.
pub const ALIVE: Color = WHITE;
/// Gridline color.
pub const GRIDLINE: Color = DARKGRAY;
/// Overlay text color.
pub const TEXT: Color = WHITE;

/// Pixel size of one cell for a grid of `dimension` cells across.
pub fn cell_size(dimension: usize) -> f32 {
    WINDOW_SIZE / dimension as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_uses_twelve_pixel_cells() {
        assert!((cell_size(50) - 12.0).abs() < f32::EPSILON);
    }
}
