//! Marga - maze navigation runner
//!
//! Loads an ASCII maze, explores it on the first run and replays the
//! remembered route on the following runs.
//!
//! Usage:
//!   marga --maze mazes/branches.txt
//!   marga --maze mazes/branches.txt --runs 3 --seed 7
//!   RUST_LOG=debug marga --maze mazes/branches.txt --config configs/marga.toml

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use marga::config::MargaConfig;
use marga::sim::{GridMaze, MazeRunner};
use marga::{Mode, NavigationController, Result};

/// Maze navigation runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file (`#` wall, `.` open, `S` start, `T` target)
    #[arg(short, long)]
    maze: PathBuf,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of runs through the maze
    #[arg(long)]
    runs: Option<u32>,

    /// Seed for junction exit selection
    #[arg(long)]
    seed: Option<u64>,

    /// Step budget per run
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("[Sim] {} ({})", e, e.code());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None => MargaConfig::default(),
    };

    // Command line overrides
    if let Some(runs) = args.runs {
        config.simulation.runs = runs;
    }
    if let Some(seed) = args.seed {
        config.navigator.rng_seed = Some(seed);
    }
    if let Some(max_steps) = args.max_steps {
        config.simulation.max_steps_per_run = max_steps;
    }

    let maze = GridMaze::load(&args.maze)?;
    info!(
        "Loaded {}x{} maze from {:?}, start {} target {}",
        maze.width(),
        maze.height(),
        args.maze,
        maze.start(),
        maze.target()
    );

    let controller = NavigationController::new(config.navigator.clone());
    let mut runner = MazeRunner::new(controller, maze, config.simulation.clone());

    println!(
        "{:>4} {:>8} {:>10} {:>8} {:>8} {:>8}",
        "run", "steps", "collisions", "explore", "backtrk", "route"
    );
    for summary in runner.run_all()? {
        println!(
            "{:>4} {:>8} {:>10} {:>8} {:>8} {:>8}",
            summary.run,
            summary.steps,
            summary.collisions,
            summary.steps_in(Mode::Explore),
            summary.steps_in(Mode::Backtrack),
            summary.steps_in(Mode::Route),
        );
    }

    let progress = runner.controller().progress();
    println!(
        "junctions remembered: {}, route fallbacks: {}",
        progress.junctions_recorded, progress.route_fallbacks
    );
    Ok(())
}
