use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

/// Glider cells relative to its anchor, as `(row, col)` offsets.
pub const GLIDER: [(isize, isize); 5] = [(0, 0), (1, 1), (2, -1), (2, 0), (2, 1)];

/// Anchor of the glider seed: two rows below the grid center.
pub fn glider_anchor(dimension: usize) -> (isize, isize) {
    let half = (dimension / 2) as isize;
    (half + 2, half)
}

/// Kill every cell, then place the glider around [`glider_anchor`].
///
/// Glider cells that would land outside a small grid are skipped.
pub fn seed_glider(grid: &mut Grid) {
    grid.clear();
    let (anchor_row, anchor_col) = glider_anchor(grid.dimension());
    for (dr, dc) in GLIDER {
        if let Some((r, c)) = grid.locate(anchor_row + dr, anchor_col + dc) {
            grid.set(r, c, true);
        }
    }
}

/// The pattern a grid is seeded with at startup and on every reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Scenario {
    /// A single glider near the center.
    #[default]
    Glider,
    /// Cells alive with probability `density`, reproducible from `seed`.
    Random {
        /// RNG seed.
        seed: u64,
        /// Probability that a cell starts alive.
        density: f64,
    },
}

impl Scenario {
    /// Check the scenario's parameters.
    pub fn validate(&self) -> LifeResult<()> {
        match *self {
            Self::Glider => Ok(()),
            Self::Random { density, .. } if (0.0..=1.0).contains(&density) => Ok(()),
            Self::Random { density, .. } => Err(LifeError::InvalidDensity(density)),
        }
    }

    /// Overwrite every cell of `grid` with this scenario.
    ///
    /// The result depends only on the scenario and the grid's dimension.
    pub fn seed(&self, grid: &mut Grid) {
        match *self {
            Self::Glider => seed_glider(grid),
            Self::Random { seed, density } => {
                grid.clear();
                let density = if density.is_nan() {
                    0.0
                } else {
                    density.clamp(0.0, 1.0)
                };
                let mut rng = StdRng::seed_from_u64(seed);
                let n = grid.dimension();
                for row in 0..n {
                    for col in 0..n {
                        grid.set(row, col, rng.random_bool(density));
                    }
                }
            }
        }
        log::debug!(
            "seeded {} scenario: {} live cells",
            self.name(),
            grid.population()
        );
    }

    /// Short name for status output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::Random { .. } => "random",
        }
    }
}
