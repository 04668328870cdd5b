//! Compass headings
//!
//! Turning walks the cycle North -> East -> South -> West -> North.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four headings a rover can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

/// Clockwise turn order
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Position in the clockwise cycle
    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Rotate 90 degrees clockwise
    pub fn turn_right(self) -> Self {
        ALL_DIRECTIONS[(self.index() + 1) % 4]
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn turn_left(self) -> Self {
        ALL_DIRECTIONS[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Self {
        ALL_DIRECTIONS[(self.index() + 2) % 4]
    }

    /// Unit step (dx, dy) when moving toward this heading
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Full compass name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_right_cycle() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.turn_right(), Direction::South);
        assert_eq!(Direction::South.turn_right(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn test_turn_left_cycle() {
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::West.turn_left(), Direction::South);
        assert_eq!(Direction::South.turn_left(), Direction::East);
        assert_eq!(Direction::East.turn_left(), Direction::North);
    }

    #[test]
    fn test_four_turns_close_the_cycle() {
        for dir in ALL_DIRECTIONS {
            let right = dir.turn_right().turn_right().turn_right().turn_right();
            let left = dir.turn_left().turn_left().turn_left().turn_left();
            assert_eq!(right, dir);
            assert_eq!(left, dir);
            assert_eq!(dir.turn_left().turn_right(), dir);
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for dir in ALL_DIRECTIONS {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::South.to_string(), "South");
        assert_eq!(Direction::North.to_string(), "North");
    }
}
