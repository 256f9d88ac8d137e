//! Turtle Grid
//!
//! Steer a single marker across a fixed grid from the keyboard.
//!
//! # Overview
//!
//! The marker sits on a lattice point, faces one of four cardinal headings
//! and carries a speed dial from 1 to 10. Moves that would leave the grid
//! and speed changes that would leave the dial are dropped silently.
//!
//! # Modules
//!
//! - [`game_engine`] - Command dispatch and session state
//! - [`models`] - Domain models (Boundaries, Actor, Heading, Speed, etc.)
//! - [`services`] - Navigation, speed and paint operations, the session loop
//! - [`controls`] - Key bindings
//! - [`io`] - Input/output abstractions and the terminal front-end
//! - [`ui`] - Frame and info pane presentation
//!
//! # Example
//!
//! ```rust
//! use turtle_grid::{Command, GameEngine};
//! use turtle_grid::models::boundaries::GridConfig;
//!
//! let mut engine = GameEngine::new(&GridConfig::default(), 42).unwrap();
//! engine.execute(Command::TurnRight);
//! engine.execute(Command::Advance);
//! ```

pub mod cli;
pub mod controls;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{Command, CommandOutcome, GameEngine, GameState, SpeedObserver};
pub use services::game::Game;
