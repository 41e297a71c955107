use crate::config::LifeConfig;
use crate::error::LifeResult;
use crate::grid::Grid;
use crate::interaction::{self, Command};
use crate::playback::PlaybackController;
use crate::rules::{self, Boundary};
use crate::scenario::Scenario;
use crate::snapshot::Snapshot;

/// The top-level simulation owner.
///
/// Holds the grid, playback timing, seed scenario, and the help flag the
/// front ends display. Everything runs synchronously on the caller's thread:
/// apply the frame's commands, then call [`Engine::tick`] with the frame time.
#[derive(Clone)]
pub struct Engine {
    grid: Grid,
    playback: PlaybackController,
    boundary: Boundary,
    scenario: Scenario,
    generation: u64,
    help_visible: bool,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("dimension", &self.grid.dimension())
            .field("generation", &self.generation)
            .field("population", &self.grid.population())
            .field("playback", &self.playback)
            .field("boundary", &self.boundary)
            .finish()
    }
}

impl Engine {
    /// Build an engine and seed its grid. Invalid configuration is an error.
    pub fn new(config: LifeConfig) -> LifeResult<Self> {
        config.validate()?;
        let mut grid = Grid::new(config.dimension)?;
        config.scenario.seed(&mut grid);
        let playback = PlaybackController::new(config.update_interval)?;
        log::info!(
            "engine ready: {n}x{n} grid, {} scenario, {:?} boundary, {:.2}s interval",
            config.scenario.name(),
            config.boundary,
            config.update_interval,
            n = config.dimension,
        );
        Ok(Self {
            grid,
            playback,
            boundary: config.boundary,
            scenario: config.scenario,
            generation: 0,
            help_visible: config.show_help,
        })
    }

    /// Build an engine around an existing grid instead of the scenario seed.
    ///
    /// The scenario is still used by [`Engine::reset`].
    pub fn with_grid(config: LifeConfig, grid: Grid) -> LifeResult<Self> {
        let mut engine = Self::new(config.with_dimension(grid.dimension()))?;
        engine.grid = grid;
        Ok(engine)
    }

    /// Apply one user command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleRun => {
                self.playback.toggle_run();
                log::debug!("playback {:?}", self.playback.mode());
            }
            Command::IncreaseSpeed => {
                self.playback.increase_speed();
                log::debug!("interval now {:.2}s", self.playback.update_interval());
            }
            Command::DecreaseSpeed => {
                self.playback.decrease_speed();
                log::debug!("interval now {:.2}s", self.playback.update_interval());
            }
            Command::Reset => self.reset(),
            Command::ToggleHelp => self.help_visible = !self.help_visible,
            Command::Step => self.step(),
            Command::ToggleCell { row, col } => {
                interaction::toggle_cell(&mut self.grid, row, col);
            }
        }
    }

    /// Feed one frame's elapsed time. Returns whether a generation advanced.
    pub fn tick(&mut self, elapsed_seconds: f64) -> bool {
        if self.playback.tick(elapsed_seconds) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Replace the grid with its next generation.
    pub fn advance(&mut self) {
        self.grid = rules::advance(&self.grid, self.boundary);
        self.generation += 1;
        log::trace!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );
    }

    /// Advance one generation, only while paused.
    pub fn step(&mut self) {
        if !self.playback.is_running() {
            self.advance();
        }
    }

    /// Pause, clear timing, reseed, and restart the generation count.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.scenario.seed(&mut self.grid);
        self.generation = 0;
        log::debug!("reset to {} scenario", self.scenario.name());
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The playback state.
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// Whether generations are being produced.
    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    /// Seconds between generations.
    pub fn update_interval(&self) -> f64 {
        self.playback.update_interval()
    }

    /// Generations advanced since startup or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The boundary mode in use.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Whether the help overlay should be drawn.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Status line for the HUD, e.g. `New generation in 0.20s.`
    pub fn status_line(&self) -> String {
        format!("New generation in {:.2}s.", self.playback.update_interval())
    }

    /// Serializable summary of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
