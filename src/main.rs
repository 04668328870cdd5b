//! Mars Rover entry point
//!
//! Generates the terrain, lands the rover, and runs the console session on
//! stdin/stdout. Logging goes to stderr (`RUST_LOG=debug` for move traces).

use std::io;
use std::process::ExitCode;

use mars_rover::console::{ReaderSource, WriterSink, land_rover};
use mars_rover::sim::Grid;
use mars_rover::{RoverError, Settings, run_session};

fn run() -> Result<(), RoverError> {
    let settings = Settings::load();

    let grid = match settings.seed {
        Some(seed) => Grid::generate(settings.bounds, seed)?,
        None => Grid::random(settings.bounds)?,
    };
    log::info!(
        "Grid has {} obstacles (seed {})",
        grid.obstacle_count(),
        grid.seed()
    );
    for p in grid.obstacles() {
        log::debug!("Obstacle at {}", p);
    }

    let mut source = ReaderSource(io::stdin().lock());
    let mut sink = WriterSink(io::stdout().lock());

    let rover = land_rover(&settings, &grid, &mut sink)?;
    let rover = run_session(rover, &mut source, &mut sink)?;
    log::info!("Session ended at {}", rover.pose());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Mars Rover starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("mars-rover: {}", e);
            ExitCode::FAILURE
        }
    }
}
