use std::fmt;

use super::constants::{INITIAL_SPEED, MAX_SPEED, MIN_SPEED};
use super::errors::{GameError, GameResult};

/// Speed dial (1 to 10)
///
/// Only its own clamped value matters to the grid; how fast the marker is
/// drawn is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(i32);

impl Speed {
    pub const MIN: Speed = Speed(MIN_SPEED);
    pub const MAX: Speed = Speed(MAX_SPEED);

    /// Create a new speed value
    ///
    /// # Returns
    /// Ok(Speed) if within 1-10, Err(InvalidSpeed) otherwise
    pub fn new(value: i32) -> GameResult<Self> {
        if (MIN_SPEED..=MAX_SPEED).contains(&value) {
            Ok(Speed(value))
        } else {
            Err(GameError::InvalidSpeed(value))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// The speed `delta` notches away, or None if that leaves the dial range.
    pub fn adjusted(&self, delta: i32) -> Option<Speed> {
        self.0
            .checked_add(delta)
            .and_then(|value| Speed::new(value).ok())
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(INITIAL_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_valid_range() {
        assert!(Speed::new(1).is_ok());
        assert!(Speed::new(5).is_ok());
        assert!(Speed::new(10).is_ok());
    }

    #[test]
    fn speed_invalid_range() {
        assert!(Speed::new(0).is_err());
        assert!(Speed::new(11).is_err());
        assert!(Speed::new(-3).is_err());
    }

    #[test]
    fn adjusted_stays_in_range() {
        let speed = Speed::new(9).unwrap();
        assert_eq!(speed.adjusted(1), Some(Speed::MAX));
        assert_eq!(Speed::MAX.adjusted(1), None);
        assert_eq!(Speed::MIN.adjusted(-1), None);
        assert_eq!(Speed::new(2).unwrap().adjusted(-1), Some(Speed::MIN));
        assert_eq!(Speed::MIN.adjusted(9), Some(Speed::MAX));
    }

    #[test]
    fn adjusted_does_not_overflow() {
        assert_eq!(Speed::MAX.adjusted(i32::MAX), None);
        assert_eq!(Speed::MIN.adjusted(i32::MIN), None);
    }

    #[test]
    fn default_is_five() {
        assert_eq!(Speed::default().value(), 5);
    }
}
