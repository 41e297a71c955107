use crate::error::{LifeError, LifeResult};
use crate::grid::MAX_DIMENSION;
use crate::playback::{DEFAULT_INTERVAL, check_interval};
use crate::rules::Boundary;
use crate::scenario::Scenario;

/// Grid side length used when none is given.
pub const DEFAULT_DIMENSION: usize = 50;

/// Configuration for building an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Side length of the square grid.
    pub dimension: usize,
    /// Initial seconds between generations.
    pub update_interval: f64,
    /// Treatment of cells beyond the grid edge.
    pub boundary: Boundary,
    /// Seed pattern used at startup and on reset.
    pub scenario: Scenario,
    /// Whether the help overlay starts visible.
    pub show_help: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            update_interval: DEFAULT_INTERVAL,
            boundary: Boundary::Dead,
            scenario: Scenario::Glider,
            show_help: true,
        }
    }
}

impl LifeConfig {
    /// Set the grid side length.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the initial update interval in seconds.
    pub fn with_update_interval(mut self, seconds: f64) -> Self {
        self.update_interval = seconds;
        self
    }

    /// Set the boundary mode.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the seed scenario.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    /// Set whether the help overlay starts visible.
    pub fn with_help(mut self, visible: bool) -> Self {
        self.show_help = visible;
        self
    }

    /// Build a configuration from the launch flags the front ends share.
    ///
    /// `wrap` selects the toroidal boundary. A `random_seed` replaces the
    /// glider with a seeded fill of the given `density`.
    pub fn from_flags(
        dimension: usize,
        update_interval: f64,
        wrap: bool,
        random_seed: Option<u64>,
        density: f64,
    ) -> Self {
        let boundary = if wrap { Boundary::Wrap } else { Boundary::Dead };
        let scenario = match random_seed {
            Some(seed) => Scenario::Random { seed, density },
            None => Scenario::Glider,
        };
        Self::default()
            .with_dimension(dimension)
            .with_update_interval(update_interval)
            .with_boundary(boundary)
            .with_scenario(scenario)
    }

    /// Reject values that cannot describe a simulation.
    pub fn validate(&self) -> LifeResult<()> {
        if !(1..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(LifeError::InvalidDimension(self.dimension));
        }
        check_interval(self.update_interval)?;
        self.scenario.validate()
    }
}
