//! Deterministic simulation module
//!
//! All rover logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable obstacle iteration order
//! - No console or platform dependencies

pub mod command;
pub mod direction;
pub mod grid;
pub mod rover;

pub use command::{Command, LineReport, execute_line, parse_line};
pub use direction::Direction;
pub use grid::{Bounds, Grid, Point};
pub use rover::{Landing, Motion, MoveOutcome, Pose, Rover, Step};
