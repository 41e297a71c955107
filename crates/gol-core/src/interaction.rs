use crate::grid::Grid;

/// A discrete, edge-triggered user action.
///
/// Front ends translate their own key and pointer events into these; the
/// engine applies them through [`Engine::apply`](crate::Engine::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pause or resume.
    ToggleRun,
    /// Lengthen the update interval by one step.
    IncreaseSpeed,
    /// Shorten the update interval by one step.
    DecreaseSpeed,
    /// Pause, clear timing, and reseed the grid.
    Reset,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Advance one generation while paused.
    Step,
    /// Flip one cell. Coordinates may lie outside the grid.
    ToggleCell {
        /// Row index, possibly negative.
        row: isize,
        /// Column index, possibly negative.
        col: isize,
    },
}

/// Flip the cell at `(row, col)` if it lies inside the grid.
///
/// Returns whether a cell changed. Coordinates outside the grid are a no-op,
/// since pointer positions near the window edge can map past it.
pub fn toggle_cell(grid: &mut Grid, row: isize, col: isize) -> bool {
    match grid.locate(row, col) {
        Some((r, c)) => grid.toggle(r, c),
        None => {
            log::trace!("ignored edit outside grid at ({row}, {col})");
            false
        }
    }
}
