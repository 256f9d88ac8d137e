//! Cardinal headings
//!
//! Headings are measured counter-clockwise from east, in degrees:
//! - 0 = East
//! - 90 = North
//! - 180 = West
//! - 270 = South

use std::fmt;

use super::errors::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];

    /// Heading for a quadrant index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Quadrant index (0-3) of this heading.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert a degree value to a heading.
    ///
    /// # Arguments
    /// * `degrees` - Any integer; wrapped modulo 360 before conversion
    ///
    /// # Returns
    /// Ok(Heading) for multiples of 90, Err(InvalidHeading) otherwise
    pub fn from_degrees(degrees: i32) -> GameResult<Self> {
        let wrapped = degrees.rem_euclid(360);
        if wrapped % 90 != 0 {
            return Err(GameError::InvalidHeading(degrees));
        }
        Ok(Self::from_index((wrapped / 90) as usize))
    }

    pub fn degrees(self) -> i32 {
        self.index() as i32 * 90
    }

    /// Rotate by a number of quarter turns. Positive turns are counter-clockwise.
    pub fn rotated(self, quarter_turns: i32) -> Self {
        let index = (self.index() as i32 + quarter_turns).rem_euclid(4);
        Self::from_index(index as usize)
    }

    /// Heading after a 90 degree turn to the left (+90).
    pub fn left(self) -> Self {
        self.rotated(1)
    }

    /// Heading after a 90 degree turn to the right (-90).
    pub fn right(self) -> Self {
        self.rotated(-1)
    }

    /// Marker glyph pointing along this heading.
    pub fn glyph(self) -> char {
        match self {
            Heading::East => '>',
            Heading::North => '^',
            Heading::West => '<',
            Heading::South => 'v',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::East => "EAST",
            Heading::North => "NORTH",
            Heading::West => "WEST",
            Heading::South => "SOUTH",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.degrees())
    }
}
