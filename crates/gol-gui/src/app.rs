//! Application state driven by the frame loop.

use gol_core::{Command, Engine};

/// State shared between the update and draw halves of a frame.
pub struct AppState {
    /// The simulation.
    pub engine: Engine,
    /// Whether the window should close.
    pub should_quit: bool,
}

impl AppState {
    /// Wrap an engine.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            should_quit: false,
        }
    }

    /// Apply this frame's commands, then account for the frame time.
    pub fn update(&mut self, commands: &[Command], frame_seconds: f32) {
        for &command in commands {
            self.engine.apply(command);
        }
        self.engine.tick(f64::from(frame_seconds));
    }
}
