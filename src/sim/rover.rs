//! Rover movement and collision rules
//!
//! A [`Pose`] is the rover's owned state. Landing it on a [`Grid`] yields a
//! [`Rover`], which pairs the pose with the grid it drives on. Every
//! operation consumes the rover and hands back the new one, so a caller
//! always sees exactly which state a move produced.
//!
//! Invariant: a landed rover never sits on an obstacle. A blocked move is
//! rolled back by the mirror move, so it ends where it started.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::{Grid, Point};
use crate::consts::*;
use crate::error::RoverError;

/// Position and heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub heading: Direction,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::new(DEFAULT_START_X, DEFAULT_START_Y),
            heading: Direction::North,
        }
    }
}

impl Pose {
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            position: Point::new(x, y),
            heading,
        }
    }

    pub fn turn_left(self) -> Self {
        Self {
            heading: self.heading.turn_left(),
            ..self
        }
    }

    pub fn turn_right(self) -> Self {
        Self {
            heading: self.heading.turn_right(),
            ..self
        }
    }

    /// One wrapping step toward `toward`; only that heading's axis changes
    fn stepped(self, grid: &Grid, toward: Direction) -> Self {
        let bounds = grid.bounds();
        let (dx, dy) = toward.delta();
        let position = Point::new(
            bounds.wrap_x(self.position.x, dx),
            bounds.wrap_y(self.position.y, dy),
        );
        Self { position, ..self }
    }

    /// Bind this pose to a grid.
    ///
    /// If the requested cell is an obstacle the rover rolls forward along
    /// its heading, wrapping at the edges, until it reaches a free cell.
    /// Fails if every cell on that line is an obstacle.
    pub fn land(self, grid: &Grid) -> Result<Landing<'_>, RoverError> {
        if !grid.is_obstacle(self.position) {
            log::info!("Rover landed at {} facing {}", self.position, self.heading);
            return Ok(Landing {
                rover: Rover { pose: self, grid },
                requested: None,
            });
        }

        // One extra step covers a start outside the bounds, which needs a step to re-enter.
        let limit = grid.bounds().span(self.heading).saturating_add(1);

        let mut pose = self;
        for _ in 0..limit {
            pose = pose.stepped(grid, pose.heading);
            if !grid.is_obstacle(pose.position) {
                log::info!(
                    "Obstacle at requested landing {}; landed at {} instead",
                    self.position,
                    pose.position
                );
                return Ok(Landing {
                    rover: Rover { pose, grid },
                    requested: Some(self.position),
                });
            }
        }

        Err(RoverError::NoLandingSite {
            start: self.position,
            heading: self.heading,
        })
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.heading)
    }
}

/// Result of binding a pose to a grid
#[derive(Debug, Clone, Copy)]
pub struct Landing<'g> {
    pub rover: Rover<'g>,
    /// The originally requested cell, when it held an obstacle
    pub requested: Option<Point>,
}

impl Landing<'_> {
    pub fn adjusted(&self) -> bool {
        self.requested.is_some()
    }
}

/// Which way a move went relative to the heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Forward,
    Backward,
}

/// What happened on a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The destination `at` held an obstacle and the move was rolled back
    Blocked { motion: Motion, at: Point },
}

impl MoveOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }

    /// Console report for a blocked move
    pub fn report(&self) -> Option<String> {
        match self {
            MoveOutcome::Moved => None,
            MoveOutcome::Blocked {
                motion: Motion::Forward,
                at,
            } => Some(format!("Cannot move forward. Obstacle present ahead at {}", at)),
            MoveOutcome::Blocked {
                motion: Motion::Backward,
                at,
            } => Some(format!("Cannot move backward. Obstacle present behind at {}", at)),
        }
    }
}

/// A move attempt: the rover after it, and how it went
#[derive(Debug, Clone, Copy)]
pub struct Step<'g> {
    pub rover: Rover<'g>,
    pub outcome: MoveOutcome,
}

/// A pose bound to the grid it drives on
#[derive(Clone, Copy)]
pub struct Rover<'g> {
    pose: Pose,
    grid: &'g Grid,
}

impl fmt::Debug for Rover<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover").field("pose", &self.pose).finish()
    }
}

impl<'g> Rover<'g> {
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Point {
        self.pose.position
    }

    pub fn heading(&self) -> Direction {
        self.pose.heading
    }

    /// Move one cell along the heading; rolled back if the cell is an obstacle
    pub fn move_forward(self) -> Step<'g> {
        self.attempt(Motion::Forward)
    }

    /// Move one cell against the heading; rolled back if the cell is an obstacle
    pub fn move_backward(self) -> Step<'g> {
        self.attempt(Motion::Backward)
    }

    fn attempt(self, motion: Motion) -> Step<'g> {
        let toward = match motion {
            Motion::Forward => self.pose.heading,
            Motion::Backward => self.pose.heading.opposite(),
        };
        let moved = self.pose.stepped(self.grid, toward);

        if self.grid.is_obstacle(moved.position) {
            log::debug!("{:?} move blocked at {}", motion, moved.position);
            // The mirror step lands back on the starting cell for any in-bounds start.
            // A start outside the bounds wraps elsewhere; never leave it on an obstacle.
            let mut restored = moved.stepped(self.grid, toward.opposite());
            if self.grid.is_obstacle(restored.position) {
                restored = self.pose;
            }
            return Step {
                rover: Rover {
                    pose: restored,
                    grid: self.grid,
                },
                outcome: MoveOutcome::Blocked {
                    motion,
                    at: moved.position,
                },
            };
        }

        log::debug!("{:?} move to {}", motion, moved.position);
        Step {
            rover: Rover {
                pose: moved,
                grid: self.grid,
            },
            outcome: MoveOutcome::Moved,
        }
    }

    pub fn turn_left(self) -> Self {
        Self {
            pose: self.pose.turn_left(),
            ..self
        }
    }

    pub fn turn_right(self) -> Self {
        Self {
            pose: self.pose.turn_right(),
            ..self
        }
    }

    /// Status line shown after each command batch
    pub fn position_report(&self) -> String {
        format!("New rover position is {}.", self.pose)
    }
}
