//! Windowed Game of Life, macroquad entry point.

use std::process;

use clap::Parser;
use macroquad::prelude::*;

use gol_core::{Engine, LifeConfig};
use gol_gui::app::AppState;
use gol_gui::theme::{WINDOW_SIZE, cell_size};
use gol_gui::{input, render};

#[derive(Parser)]
#[command(name = "gol-gui", about = "Conway's Game of Life in a window", version)]
struct Args {
    /// Cells per side of the square grid
    #[arg(short = 'n', long, default_value = "50")]
    dimension: usize,

    /// Seconds between generations (0.05 to 2.0)
    #[arg(short, long, default_value = "0.2")]
    interval: f64,

    /// Join opposite edges instead of treating the outside as dead
    #[arg(long)]
    wrap: bool,

    /// Seed a random grid with this RNG seed instead of the glider
    #[arg(long)]
    random: Option<u64>,

    /// Fraction of live cells for --random
    #[arg(long, default_value = "0.3")]
    density: f64,
}

impl Args {
    fn config(&self) -> LifeConfig {
        LifeConfig::from_flags(
            self.dimension,
            self.interval,
            self.wrap,
            self.random,
            self.density,
        )
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: WINDOW_SIZE as i32,
        window_height: WINDOW_SIZE as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let engine = match Engine::new(args.config()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let cell = cell_size(engine.grid().dimension());
    log::info!("drawing {cell:.1}px cells in a {WINDOW_SIZE}px window");
    let mut app = AppState::new(engine);

    loop {
        let commands = input::poll_commands(cell);
        app.update(&commands, get_frame_time());
        if input::quit_pressed() {
            app.should_quit = true;
        }

        render::draw(&app.engine);

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
