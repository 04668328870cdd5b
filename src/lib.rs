//! Mars Rover - a rover driving over a wrapping grid of obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, rover movement, command execution)
//! - `console`: Line source/sink abstractions and the interactive session loop
//! - `settings`: Mission configuration
//! - `error`: Crate error type

pub mod console;
pub mod error;
pub mod settings;
pub mod sim;

pub use console::{LineSink, LineSource, land_rover, run_session};
pub use error::RoverError;
pub use settings::Settings;

/// Mission configuration constants
pub mod consts {
    /// Default grid bounds (inclusive)
    pub const DEFAULT_MIN_X: i32 = 0;
    pub const DEFAULT_MAX_X: i32 = 10;
    pub const DEFAULT_MIN_Y: i32 = 0;
    pub const DEFAULT_MAX_Y: i32 = 10;

    /// Default landing spot
    pub const DEFAULT_START_X: i32 = 0;
    pub const DEFAULT_START_Y: i32 = 0;

    /// Largest grid accepted, in cells
    pub const MAX_GRID_CELLS: i64 = 1 << 24;

    /// Fraction of the grid area covered by obstacles (area / OBSTACLE_DIVISOR)
    pub const OBSTACLE_DIVISOR: i64 = 4;

    /// Session sentinel, matched case-insensitively
    pub const EXIT_COMMAND: &str = "exit";

    /// Instructions shown before every read
    pub const MENU: &str = "To move in the facing direction, input M.\n\
                            To move forward, input F\n\
                            To move backward, input B\n\
                            To turn left, input L.\n\
                            To turn right, input R OR exit:";
}
