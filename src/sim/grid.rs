//! Terrain: wrapping bounds plus a fixed obstacle layout
//!
//! Obstacles are generated once from a seed and never change afterwards.
//! They are kept in a `BTreeSet` so listing them is stable for a given seed.

use std::collections::BTreeSet;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::*;
use crate::error::RoverError;

/// An integer grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive grid bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
        }
    }
}

impl Bounds {
    /// Build bounds, rejecting empty or inverted axes
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<Self, RoverError> {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
        .validated()
    }

    /// Reject empty or inverted axes and grids over `MAX_GRID_CELLS`
    pub fn validated(self) -> Result<Self, RoverError> {
        if self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(RoverError::InvalidBounds {
                min_x: self.min_x,
                max_x: self.max_x,
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }

        let cells = axis_len(self.min_x, self.max_x) * axis_len(self.min_y, self.max_y);
        if cells > MAX_GRID_CELLS as i128 {
            return Err(RoverError::GridTooLarge {
                cells,
                limit: MAX_GRID_CELLS,
            });
        }
        Ok(self)
    }

    /// Number of obstacles a generated grid asks for (a quarter of the area)
    pub fn requested_obstacles(&self) -> usize {
        let area = (self.max_x as i128 - self.min_x as i128) * (self.max_y as i128 - self.min_y as i128);
        to_count(area / OBSTACLE_DIVISOR as i128)
    }

    /// Half-open x range obstacles are drawn from; `max_x - 1` is never drawn
    fn obstacle_x_range(&self) -> std::ops::Range<i32> {
        self.min_x..self.max_x - 1
    }

    /// Inclusive y range obstacles are drawn from
    fn obstacle_y_range(&self) -> std::ops::RangeInclusive<i32> {
        self.min_y..=self.max_y
    }

    /// Number of distinct cells obstacle generation can produce
    pub fn candidate_cells(&self) -> usize {
        let xs = (axis_len(self.min_x, self.max_x) - 2).max(0);
        to_count(xs * axis_len(self.min_y, self.max_y))
    }

    /// Number of cells along the axis `heading` moves on
    pub fn span(&self, heading: Direction) -> usize {
        match heading {
            Direction::North | Direction::South => to_count(axis_len(self.min_y, self.max_y)),
            Direction::East | Direction::West => to_count(axis_len(self.min_x, self.max_x)),
        }
    }

    /// Increment x, wrapping past `max_x` to `min_x`
    pub fn wrap_x(&self, x: i32, dx: i32) -> i32 {
        match dx.signum() {
            1 if x >= self.max_x => self.min_x,
            -1 if x <= self.min_x => self.max_x,
            _ => x + dx.signum(),
        }
    }

    /// Increment y, wrapping past `max_y` to `min_y`
    pub fn wrap_y(&self, y: i32, dy: i32) -> i32 {
        match dy.signum() {
            1 if y >= self.max_y => self.min_y,
            -1 if y <= self.min_y => self.max_y,
            _ => y + dy.signum(),
        }
    }
}

/// Cells on one inclusive axis
fn axis_len(min: i32, max: i32) -> i128 {
    max as i128 - min as i128 + 1
}

fn to_count(n: i128) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

/// The terrain a rover drives on
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Bounds,
    /// Seed the obstacle layout was generated from (0 for explicit layouts)
    seed: u64,
    obstacles: BTreeSet<Point>,
}

impl Grid {
    /// Generate a grid with a reproducible obstacle layout
    pub fn generate(bounds: Bounds, seed: u64) -> Result<Self, RoverError> {
        let bounds = bounds.validated()?;

        let requested = bounds.requested_obstacles();
        let available = bounds.candidate_cells();
        let count = if requested > available {
            log::warn!(
                "Grid wants {} obstacles but only {} cells are eligible; capping",
                requested,
                available
            );
            available
        } else {
            requested
        };

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut obstacles = BTreeSet::new();
        while obstacles.len() < count {
            let p = Point::new(
                rng.random_range(bounds.obstacle_x_range()),
                rng.random_range(bounds.obstacle_y_range()),
            );
            obstacles.insert(p);
        }

        log::info!(
            "Generated grid x {}..={} y {}..={} with {} obstacles (seed {})",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            obstacles.len(),
            seed
        );

        Ok(Self {
            bounds,
            seed,
            obstacles,
        })
    }

    /// Generate a grid from a fresh random seed
    pub fn random(bounds: Bounds) -> Result<Self, RoverError> {
        Self::generate(bounds, rand::random())
    }

    /// Build a grid with an explicit obstacle layout
    pub fn with_obstacles(
        bounds: Bounds,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self, RoverError> {
        Ok(Self {
            bounds: bounds.validated()?,
            seed: 0,
            obstacles: obstacles.into_iter().collect(),
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Obstacle cells, for diagnostics
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_obstacle_count() {
        let grid = Grid::generate(Bounds::default(), 42).unwrap();
        // (10 * 10) / 4
        assert_eq!(grid.obstacle_count(), 25);
    }

    #[test]
    fn test_obstacles_within_draw_ranges() {
        let bounds = Bounds::new(-3, 7, 2, 9).unwrap();
        let grid = Grid::generate(bounds, 7).unwrap();
        for p in grid.obstacles() {
            assert!(p.x >= -3 && p.x < 6, "x out of draw range: {}", p);
            assert!(p.y >= 2 && p.y <= 9, "y out of draw range: {}", p);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Grid::generate(Bounds::default(), 1234).unwrap();
        let b = Grid::generate(Bounds::default(), 1234).unwrap();
        assert_eq!(a.obstacles().collect::<Vec<_>>(), b.obstacles().collect::<Vec<_>>());
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_obstacle_request_is_capped() {
        // Area 2*5 = 10 -> 2 obstacles requested, but only x = 0 is drawable: 6 cells.
        let bounds = Bounds::new(0, 2, 0, 5).unwrap();
        assert_eq!(bounds.candidate_cells(), 6);
        let grid = Grid::generate(bounds, 9).unwrap();
        assert_eq!(grid.obstacle_count(), 2);

        // Area 1*8 = 8 -> 2 requested, no drawable x at all.
        let bounds = Bounds::new(0, 1, 0, 8).unwrap();
        assert_eq!(bounds.candidate_cells(), 0);
        let grid = Grid::generate(bounds, 9).unwrap();
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(matches!(
            Bounds::new(5, 5, 0, 10),
            Err(RoverError::InvalidBounds { .. })
        ));
        assert!(Bounds::new(0, 10, 3, 1).is_err());
        let bad = Bounds {
            min_x: 0,
            max_x: 10,
            min_y: 4,
            max_y: 4,
        };
        assert!(Grid::generate(bad, 1).is_err());
        assert!(Grid::with_obstacles(bad, []).is_err());
    }

    #[test]
    fn test_extreme_bounds_rejected() {
        let err = Bounds::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX).unwrap_err();
        assert!(matches!(err, RoverError::GridTooLarge { .. }));

        // Counting never overflows, even on bounds that skipped validation.
        let wide = Bounds {
            min_x: i32::MIN,
            max_x: i32::MAX,
            min_y: i32::MIN,
            max_y: i32::MAX,
        };
        // (2^32 - 1)^2 / 4
        let quarter = (1u128 << 62) - (1u128 << 31);
        assert_eq!(wide.requested_obstacles() as u128, quarter.min(usize::MAX as u128));
        assert!(wide.candidate_cells() > 0);
        assert_eq!(wide.span(Direction::East) as u128, (1u128 << 32).min(usize::MAX as u128));
        assert!(Grid::generate(wide, 1).is_err());

        // Thin but very long axes stay within the cap.
        let line = Bounds::new(0, 1, 0, 1_000_000).unwrap();
        assert_eq!(line.span(Direction::North), 1_000_001);
    }

    #[test]
    fn test_wrap_arithmetic() {
        let b = Bounds::new(0, 3, -2, 2).unwrap();
        assert_eq!(b.wrap_x(3, 1), 0);
        assert_eq!(b.wrap_x(0, -1), 3);
        assert_eq!(b.wrap_x(1, 1), 2);
        assert_eq!(b.wrap_y(2, 1), -2);
        assert_eq!(b.wrap_y(-2, -1), 2);
        assert_eq!(b.wrap_y(0, -1), -1);
        assert_eq!(b.wrap_y(0, 0), 0);
    }

    #[test]
    fn test_explicit_obstacles() {
        let grid = Grid::with_obstacles(Bounds::default(), [Point::new(1, 0), Point::new(1, 0)]).unwrap();
        assert_eq!(grid.obstacle_count(), 1);
        assert!(grid.is_obstacle(Point::new(1, 0)));
        assert!(!grid.is_obstacle(Point::new(0, 1)));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
    }
}
