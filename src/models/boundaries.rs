//! Grid geometry
//!
//! `GridConfig` is the user-facing description of the grid; `Boundaries`
//! is the validated rectangle of legal marker positions derived from it.

use super::constants::{GRID_HEIGHT, GRID_WIDTH, MAX_GRID_STEPS, STEP};
use super::errors::{GameError, GameResult};
use super::position::GridPosition;

/// Grid dimensions before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub step: i32,
    /// Width in steps. Must be even and positive.
    pub width: i32,
    /// Height in steps. Must be even and positive.
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            step: STEP,
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl GridConfig {
    pub fn boundaries(&self) -> GameResult<Boundaries> {
        Boundaries::new(self)
    }
}

/// Inclusive, axis-aligned rectangle of legal positions.
/// Invariant: left < right, bottom < top, all four are multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    step: i32,
}

impl Boundaries {
    /// Compute boundaries centred on the origin.
    ///
    /// Odd dimensions are rejected: half of an odd width would put the edges
    /// off the step lattice. The full extent plus one step past each edge
    /// must fit in `i32`, so a step off any edge is still representable.
    pub fn new(config: &GridConfig) -> GameResult<Self> {
        let GridConfig { step, width, height } = *config;
        if step <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "step must be positive, got {}",
                step
            )));
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value <= 0 || value % 2 != 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be a positive even number of steps, got {}",
                    name, value
                )));
            }
            if value > MAX_GRID_STEPS {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be at most {} steps, got {}",
                    name, MAX_GRID_STEPS, value
                )));
            }
            if step.checked_mul(value + 2).is_none() {
                return Err(GameError::InvalidConfig(format!(
                    "grid {} of {} steps of {} overflows",
                    name, value, step
                )));
            }
        }
        let half_width = step * (width / 2);
        let half_height = step * (height / 2);

        Ok(Boundaries {
            left: -half_width,
            right: half_width,
            top: half_height,
            bottom: -half_height,
            step,
        })
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, pos: GridPosition) -> bool {
        (self.left..=self.right).contains(&pos.x) && (self.bottom..=self.top).contains(&pos.y)
    }

    /// True if both coordinates are multiples of the step.
    pub fn is_on_grid(&self, pos: GridPosition) -> bool {
        pos.x.rem_euclid(self.step) == 0 && pos.y.rem_euclid(self.step) == 0
    }

    /// Number of lattice columns (left to right inclusive).
    pub fn columns(&self) -> usize {
        ((self.right - self.left) / self.step + 1) as usize
    }

    /// Number of lattice rows (top to bottom inclusive).
    pub fn rows(&self) -> usize {
        ((self.top - self.bottom) / self.step + 1) as usize
    }

    /// Zero-based (column, row) of a contained lattice point; row 0 is the top edge.
    pub fn cell_of(&self, pos: GridPosition) -> Option<(usize, usize)> {
        if !self.contains(pos) || !self.is_on_grid(pos) {
            return None;
        }
        let column = (pos.x - self.left) / self.step;
        let row = (self.top - pos.y) / self.step;
        Some((column as usize, row as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_plus_minus_200() {
        let b = GridConfig::default().boundaries().unwrap();
        assert_eq!((b.left, b.right, b.top, b.bottom), (-200, 200, 200, -200));
        assert_eq!(b.step(), 50);
    }

    #[test]
    fn lattice_dimensions() {
        let b = GridConfig::default().boundaries().unwrap();
        assert_eq!(b.columns(), 9);
        assert_eq!(b.rows(), 9);

        let wide = GridConfig { step: 10, width: 4, height: 2 }.boundaries().unwrap();
        assert_eq!((wide.columns(), wide.rows()), (5, 3));
    }

    #[test]
    fn edges_are_inclusive() {
        let b = GridConfig::default().boundaries().unwrap();
        assert!(b.contains(GridPosition::new(200, 0)));
        assert!(b.contains(GridPosition::new(-200, -200)));
        assert!(!b.contains(GridPosition::new(250, 0)));
        assert!(!b.contains(GridPosition::new(0, -250)));
    }

    #[test]
    fn rejects_bad_config() {
        for config in [
            GridConfig { step: 0, width: 8, height: 8 },
            GridConfig { step: -5, width: 8, height: 8 },
            GridConfig { step: 50, width: 7, height: 8 },
            GridConfig { step: 50, width: 8, height: 0 },
            GridConfig { step: 50, width: -2, height: 8 },
            GridConfig { step: i32::MAX, width: 8, height: 8 },
            GridConfig { step: 1 << 30, width: 2, height: 2 },
            GridConfig { step: 1, width: MAX_GRID_STEPS + 2, height: 8 },
            GridConfig { step: 1, width: 8, height: 200_000_000 },
        ] {
            assert!(
                matches!(config.boundaries(), Err(GameError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn largest_grid_is_accepted() {
        let config = GridConfig { step: 1, width: MAX_GRID_STEPS, height: MAX_GRID_STEPS };
        let b = config.boundaries().unwrap();
        assert_eq!(b.columns(), MAX_GRID_STEPS as usize + 1);
        assert_eq!(b.rows(), MAX_GRID_STEPS as usize + 1);
    }

    #[test]
    fn largest_step_leaves_room_past_the_edge() {
        let step = i32::MAX / 4;
        let b = GridConfig { step, width: 2, height: 2 }.boundaries().unwrap();
        assert_eq!(b.right, step);
        assert!(b.right.checked_add(step).is_some());
        assert!(b.bottom.checked_sub(step).is_some());
        assert!(GridConfig { step: step + 1, width: 2, height: 2 }.boundaries().is_err());
    }

    #[test]
    fn cell_of_corners() {
        let b = GridConfig::default().boundaries().unwrap();
        assert_eq!(b.cell_of(GridPosition::new(-200, 200)), Some((0, 0)));
        assert_eq!(b.cell_of(GridPosition::new(200, -200)), Some((8, 8)));
        assert_eq!(b.cell_of(GridPosition::ORIGIN), Some((4, 4)));
        assert_eq!(b.cell_of(GridPosition::new(25, 0)), None);
        assert_eq!(b.cell_of(GridPosition::new(250, 0)), None);
    }
}
