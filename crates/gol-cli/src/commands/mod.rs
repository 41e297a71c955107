pub mod play;
pub mod run;

use clap::{Args, ValueEnum};

use gol_core::{Engine, LifeConfig};

/// Simulation options shared by every subcommand.
#[derive(Debug, Args)]
pub struct SimArgs {
    /// Cells per side of the square grid
    #[arg(short = 'n', long, default_value = "50")]
    pub dimension: usize,

    /// Seconds between generations (0.05 to 2.0)
    #[arg(short, long, default_value = "0.2")]
    pub interval: f64,

    /// Join opposite edges instead of treating the outside as dead
    #[arg(long)]
    pub wrap: bool,

    /// Seed a random grid with this RNG seed instead of the glider
    #[arg(long)]
    pub random: Option<u64>,

    /// Fraction of live cells for --random
    #[arg(long, default_value = "0.3")]
    pub density: f64,
}

impl SimArgs {
    /// Translate the flags into an engine configuration.
    pub fn config(&self) -> LifeConfig {
        LifeConfig::from_flags(
            self.dimension,
            self.interval,
            self.wrap,
            self.random,
            self.density,
        )
    }

    /// Build an engine from the flags.
    pub fn engine(&self) -> Result<Engine, String> {
        Engine::new(self.config()).map_err(|e| format!("invalid configuration: {e}"))
    }
}

/// How `run` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The grid as rows of '#' and '.'.
    Text,
    /// A JSON snapshot of the engine.
    Json,
}
