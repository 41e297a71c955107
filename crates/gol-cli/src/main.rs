//! CLI frontend for the Game of Life engine.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::{OutputFormat, SimArgs};

#[derive(Parser)]
#[command(
    name = "gol",
    about = "Conway's Game of Life on a bounded grid",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a grid headlessly and print the result
    Run {
        /// Number of generations to compute
        #[arg(short, long, default_value = "4")]
        generations: u64,

        /// Start from a text grid ('#' alive, '.' dead) instead of the scenario
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print only the grid, without the summary table
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        sim: SimArgs,
    },

    /// Watch and edit the simulation in the terminal
    Play {
        #[command(flatten)]
        sim: SimArgs,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            generations,
            pattern,
            format,
            quiet,
            sim,
        } => commands::run::run(&sim, generations, pattern.as_deref(), format, quiet),
        Commands::Play { sim } => commands::play::run(&sim),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
