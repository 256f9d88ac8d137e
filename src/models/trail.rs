//! Pen trail
//!
//! Every accepted step leaves a segment between two neighbouring lattice
//! points in the color the actor had when it moved. Retracing a segment
//! repaints it, so the trail is bounded by the number of grid edges.

use std::collections::HashMap;

use super::color::Rgb;
use super::position::GridPosition;

/// A drawn edge between two neighbouring lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: GridPosition,
    pub to: GridPosition,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct Trail {
    /// Keyed by the endpoints in (x, y) order, so both directions share a key.
    segments: HashMap<(GridPosition, GridPosition), Segment>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, from: GridPosition, to: GridPosition, color: Rgb) {
        self.segments.insert(Self::key(from, to), Segment { from, to, color });
    }

    /// The segment joining two points, in either direction.
    pub fn segment(&self, a: GridPosition, b: GridPosition) -> Option<&Segment> {
        self.segments.get(&Self::key(a, b))
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn key(a: GridPosition, b: GridPosition) -> (GridPosition, GridPosition) {
        if (a.x, a.y) <= (b.x, b.y) {
            (a, b)
        } else {
            (b, a)
        }
    }
}
