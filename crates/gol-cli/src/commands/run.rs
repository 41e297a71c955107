use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gol_core::{Boundary, Engine, Grid};

use super::{OutputFormat, SimArgs};

/// Population history gathered while advancing.
#[derive(Debug, Default, PartialEq, Eq)]
struct RunStats {
    initial: usize,
    peak: usize,
    peak_generation: u64,
    settled_at: Option<u64>,
    extinct_at: Option<u64>,
}

pub fn run(
    sim: &SimArgs,
    generations: u64,
    pattern: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let mut engine = match pattern {
        Some(path) => load_pattern(sim, path)?,
        None => sim.engine()?,
    };
    let source = match pattern {
        Some(path) => path.display().to_string(),
        None => sim.config().scenario.name().to_string(),
    };

    let stats = advance(&mut engine, generations);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&engine.snapshot())
                .map_err(|e| format!("cannot serialize snapshot: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text if quiet => println!("{}", engine.grid()),
        OutputFormat::Text => {
            let n = engine.grid().dimension();
            println!(
                "  {} {}",
                "Game of Life".bold(),
                format!(
                    "({n}x{n}, {source}, {} boundary, {generations} generations)",
                    boundary_name(engine.boundary())
                )
                .dimmed()
            );
            println!();
            println!("{}", engine.grid());
            println!();
            print_summary(&engine, &stats);
        }
    }

    Ok(())
}

fn load_pattern(sim: &SimArgs, path: &Path) -> Result<Engine, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let grid = Grid::from_text(&text)
        .map_err(|e| format!("invalid pattern in {}: {e}", path.display()))?;
    log::info!(
        "loaded {}: {n}x{n}, {} live cells",
        path.display(),
        grid.population(),
        n = grid.dimension()
    );
    Engine::with_grid(sim.config(), grid).map_err(|e| format!("invalid configuration: {e}"))
}

fn advance(engine: &mut Engine, generations: u64) -> RunStats {
    let initial = engine.grid().population();
    let mut stats = RunStats {
        initial,
        peak: initial,
        ..RunStats::default()
    };
    if initial == 0 {
        stats.extinct_at = Some(0);
    }

    for _ in 0..generations {
        let previous = engine.grid().clone();
        engine.advance();
        let generation = engine.generation();
        let population = engine.grid().population();

        if population > stats.peak {
            stats.peak = population;
            stats.peak_generation = generation;
        }
        if population == 0 && stats.extinct_at.is_none() {
            stats.extinct_at = Some(generation);
        }
        if stats.settled_at.is_none() && engine.grid() == &previous {
            stats.settled_at = Some(generation - 1);
        }
    }
    stats
}

fn print_summary(engine: &Engine, stats: &RunStats) {
    println!("  {}", "Summary".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Generations".to_string(),
        engine.generation().to_string(),
    ]);
    table.add_row(vec![
        "Initial population".to_string(),
        stats.initial.to_string(),
    ]);
    table.add_row(vec![
        "Final population".to_string(),
        engine.grid().population().to_string(),
    ]);
    table.add_row(vec![
        "Peak population".to_string(),
        format!("{} (generation {})", stats.peak, stats.peak_generation),
    ]);
    table.add_row(vec![
        "Still since".to_string(),
        stats
            .settled_at
            .map_or_else(|| "--".to_string(), |g| format!("generation {g}")),
    ]);
    table.add_row(vec![
        "Extinct at".to_string(),
        stats
            .extinct_at
            .map_or_else(|| "--".to_string(), |g| format!("generation {g}")),
    ]);
    println!("{table}");

    if engine.grid().population() == 0 {
        println!();
        println!("  {} every cell is dead", "EXTINCT".red().bold());
    }
}

fn boundary_name(boundary: Boundary) -> &'static str {
    match boundary {
        Boundary::Dead => "dead",
        Boundary::Wrap => "wrapping",
    }
}
