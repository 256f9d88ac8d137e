//! Navigation system
//!
//! Handles stepping the actor between lattice points and turning it
//! between cardinal headings.

mod course;
mod movement;
mod steering;

pub use course::heading_vector;
pub use movement::{advance, MoveOutcome};
pub use steering::{turn_left, turn_right};
