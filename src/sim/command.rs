//! Single-character command interpreter
//!
//! A line is read left to right. Unknown characters are skipped, and the
//! first blocked move ends the line.

use super::rover::{MoveOutcome, Rover};

/// A rover command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
}

impl Command {
    /// Map a command character, ignoring case.
    ///
    /// `f` is advertised as "move forward" in the menu but has always driven
    /// the rover backward, exactly like `b`. Kept that way so existing command
    /// scripts replay identically.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'm' => Some(Command::MoveForward),
            'f' | 'b' => Some(Command::MoveBackward),
            'l' => Some(Command::TurnLeft),
            'r' => Some(Command::TurnRight),
            _ => None,
        }
    }

    /// Apply to a rover, returning the new rover and the move outcome
    pub fn apply(self, rover: Rover<'_>) -> (Rover<'_>, MoveOutcome) {
        match self {
            Command::MoveForward => {
                let step = rover.move_forward();
                (step.rover, step.outcome)
            }
            Command::MoveBackward => {
                let step = rover.move_backward();
                (step.rover, step.outcome)
            }
            Command::TurnLeft => (rover.turn_left(), MoveOutcome::Moved),
            Command::TurnRight => (rover.turn_right(), MoveOutcome::Moved),
        }
    }
}

/// Commands in a line, in order, with unknown characters dropped
pub fn parse_line(line: &str) -> impl Iterator<Item = Command> + '_ {
    line.chars().filter_map(Command::from_char)
}

/// Outcome of running one input line
#[derive(Debug, Clone, Copy)]
pub struct LineReport<'g> {
    pub rover: Rover<'g>,
    /// Blocked move that stopped the line early
    pub blocked: Option<MoveOutcome>,
    /// Commands actually applied, including a blocked one
    pub executed: usize,
}

/// Run every command in `line` until one is blocked
pub fn execute_line<'g>(rover: Rover<'g>, line: &str) -> LineReport<'g> {
    let mut rover = rover;
    let mut executed = 0;

    for command in parse_line(line) {
        let (next, outcome) = command.apply(rover);
        rover = next;
        executed += 1;

        if !outcome.succeeded() {
            log::debug!("Line halted after {} commands", executed);
            return LineReport {
                rover,
                blocked: Some(outcome),
                executed,
            };
        }
    }

    LineReport {
        rover,
        blocked: None,
        executed,
    }
}
