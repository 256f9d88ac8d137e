//! Command-line interface

pub mod args;
pub mod logging;

pub use args::{parse, Args};
pub use logging::init_tracing;
