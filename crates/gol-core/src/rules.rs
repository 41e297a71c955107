use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Relative positions of the eight Moore neighbors.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How positions beyond the edge of the grid are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Everything outside the grid is permanently dead.
    #[default]
    Dead,
    /// Opposite edges are joined (toroidal grid).
    Wrap,
}

/// Which rule of B3/S23 decided a cell's next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dead cell with exactly three live neighbors comes alive.
    Birth,
    /// Live cell with two or three live neighbors stays alive.
    Survival,
    /// Live cell with fewer than two live neighbors dies.
    Isolation,
    /// Live cell with more than three live neighbors dies.
    Overcrowding,
    /// Dead cell without exactly three live neighbors stays dead.
    Dormant,
}

impl Outcome {
    /// Classify a cell from its current state and live-neighbor count.
    pub fn classify(alive: bool, live_neighbors: u8) -> Self {
        match (alive, live_neighbors) {
            (false, 3) => Self::Birth,
            (false, _) => Self::Dormant,
            (true, 0..=1) => Self::Isolation,
            (true, 2..=3) => Self::Survival,
            (true, _) => Self::Overcrowding,
        }
    }

    /// Whether the cell is alive in the next generation.
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Birth | Self::Survival)
    }
}

/// Next state of a single cell under B3/S23.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    Outcome::classify(alive, live_neighbors).is_alive()
}

/// Count live cells among the eight neighbors of `(row, col)`.
///
/// The cell itself is never counted. With [`Boundary::Dead`], neighbor
/// positions outside the grid contribute nothing.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize, boundary: Boundary) -> u8 {
    let n = grid.dimension() as isize;
    let (row, col) = (row as isize, col as isize);

    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (r, c) = match boundary {
            Boundary::Dead => (row + dr, col + dc),
            Boundary::Wrap => ((row + dr).rem_euclid(n), (col + dc).rem_euclid(n)),
        };
        if grid
            .locate(r, c)
            .is_some_and(|(r, c)| grid.is_alive(r, c))
        {
            count += 1;
        }
    }
    count
}

/// Compute the next generation.
///
/// Every neighbor count is taken from `grid`, and the result is written to a
/// separate buffer, so no cell ever sees an already-updated neighbor.
pub fn advance(grid: &Grid, boundary: Boundary) -> Grid {
    let n = grid.dimension();
    let mut next = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let neighbors = count_live_neighbors(grid, row, col, boundary);
            next.push(next_state(grid.is_alive(row, col), neighbors));
        }
    }
    Grid::from_cells(n, next)
}
