use serde::Serialize;

use crate::engine::Engine;
use crate::rules::Boundary;

/// A point-in-time summary of an engine, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Side length of the grid.
    pub dimension: usize,
    /// Generations since startup or the last reset.
    pub generation: u64,
    /// Number of live cells.
    pub population: usize,
    /// Whether playback was running.
    pub running: bool,
    /// Seconds between generations.
    pub update_interval: f64,
    /// Boundary mode in use.
    pub boundary: Boundary,
    /// Live cells as `[row, col]` pairs in row-major order.
    pub live_cells: Vec<[usize; 2]>,
}

impl Snapshot {
    /// Capture the engine's current state.
    pub fn capture(engine: &Engine) -> Self {
        let grid = engine.grid();
        Self {
            dimension: grid.dimension(),
            generation: engine.generation(),
            population: grid.population(),
            running: engine.is_running(),
            update_interval: engine.update_interval(),
            boundary: engine.boundary(),
            live_cells: grid.live_cells().map(|(r, c)| [r, c]).collect(),
        }
    }
}
