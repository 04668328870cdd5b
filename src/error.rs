//! Crate error type
//!
//! Blocked moves are not errors; they are reported as
//! [`MoveOutcome::Blocked`](crate::sim::MoveOutcome::Blocked).

use thiserror::Error;

use crate::sim::{Direction, Point};

#[derive(Error, Debug)]
pub enum RoverError {
    #[error("invalid grid bounds: x {min_x}..={max_x}, y {min_y}..={max_y} (min must be below max)")]
    InvalidBounds {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },

    #[error("grid of {cells} cells exceeds the {limit} cell limit")]
    GridTooLarge { cells: i128, limit: i64 },

    #[error("no free cell to land on heading {heading} from {start}")]
    NoLandingSite { start: Point, heading: Direction },

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
