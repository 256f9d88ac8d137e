//! Domain models
//!
//! This module contains the grid geometry and the actor state. Models are
//! pure data structures with minimal logic; mutation happens in services.

pub mod actor;
pub mod boundaries;
pub mod color;
pub mod constants;
pub mod errors;
pub mod heading;
pub mod position;
pub mod speed;
pub mod trail;
pub mod world;
