//! Key bindings
//!
//! Translates terminal key events and replay script characters into
//! engine commands.

pub mod keyboard;

pub use keyboard::{command_for_char, command_for_key};
