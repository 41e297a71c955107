//! Cellular-automaton engine for Conway's Game of Life.
//!
//! A bounded N x N [`Grid`] is advanced one generation at a time by the pure
//! functions in [`rules`]. A [`PlaybackController`] turns frame times into
//! generation ticks, and the [`Engine`] ties grid, timing, seed scenario,
//! and user [`Command`]s together. Rendering and input polling live in the
//! front-end crates.

/// Engine configuration and its validation.
pub mod config;
/// The top-level engine that owns all simulation state.
pub mod engine;
/// Error types for the crate.
pub mod error;
/// The cell matrix.
pub mod grid;
/// User commands and cell editing.
pub mod interaction;
/// Pause/run timing and speed control.
pub mod playback;
/// Neighbor counting and the B3/S23 generation step.
pub mod rules;
/// Seed patterns applied at startup and on reset.
pub mod scenario;
/// Serializable engine summaries.
pub mod snapshot;

/// Re-export of [`config::LifeConfig`].
pub use config::LifeConfig;
/// Re-export of [`engine::Engine`].
pub use engine::Engine;
/// Re-exports of [`error::LifeError`] and [`error::LifeResult`].
pub use error::{LifeError, LifeResult};
/// Re-export of [`grid::Grid`].
pub use grid::Grid;
/// Re-export of [`interaction::Command`].
pub use interaction::Command;
/// Re-exports of [`playback::PlaybackController`] and [`playback::PlaybackMode`].
pub use playback::{PlaybackController, PlaybackMode};
/// Re-export of [`rules::Boundary`].
pub use rules::Boundary;
/// Re-export of [`scenario::Scenario`].
pub use scenario::Scenario;
/// Re-export of [`snapshot::Snapshot`].
pub use snapshot::Snapshot;
