use super::color::Rgb;
use super::heading::Heading;
use super::position::GridPosition;
use super::speed::Speed;

/// The marker steered around the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    position: GridPosition,
    heading: Heading,
    speed: Speed,
    color: Rgb,
}

impl Actor {
    pub fn new(position: GridPosition, heading: Heading) -> Self {
        Actor {
            position,
            heading,
            speed: Speed::default(),
            color: Rgb::WHITE,
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn set_position(&mut self, position: GridPosition) {
        self.position = position;
    }

    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub(crate) fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}
