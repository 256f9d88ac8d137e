//! Input/output abstractions
//!
//! Provides traits for reading commands and drawing frames, with a crossterm
//! terminal implementation for interactive play and scripted implementations
//! for replay runs and tests.

mod scripted;
mod terminal;

pub use scripted::{FrameRecorder, ScriptedKeys};
pub use terminal::{TerminalKeys, TerminalScreen};

use crate::game_engine::Command;
use crate::models::errors::GameResult;
use crate::ui::Frame;

/// Trait for reading player commands
pub trait KeySource {
    /// Block until the next bound key and return its command
    fn next_command(&mut self) -> GameResult<Command>;
}

/// Trait for displaying frames to the player
pub trait FrameWriter {
    fn draw(&mut self, frame: &Frame) -> GameResult<()>;
}
