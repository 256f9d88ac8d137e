use std::fmt;

/// A lattice point on the grid, in step units scaled by the step size.
/// (0,0) is the centre. X increases left-to-right, Y increases bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        GridPosition { x, y }
    }

    /// The position `distance` units along the unit vector `(dx, dy)`,
    /// or None if either coordinate leaves the `i32` range.
    pub fn offset(self, (dx, dy): (i32, i32), distance: i32) -> Option<Self> {
        Some(GridPosition {
            x: self.x.checked_add(dx.checked_mul(distance)?)?,
            y: self.y.checked_add(dy.checked_mul(distance)?)?,
        })
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
