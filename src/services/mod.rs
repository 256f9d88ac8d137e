//! Game services
//!
//! This module contains the operations that mutate the world (navigation,
//! speed, paint) and the session loop that drives them from key input.

pub mod game;
pub mod navigation;
pub mod paint;
pub mod speed;
