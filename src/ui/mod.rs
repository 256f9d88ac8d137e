//! User interface and presentation
//!
//! This module contains presenters that turn the world into text frames,
//! separating presentation from the grid logic.

pub mod presenters;

pub use presenters::{Frame, GridPresenter, InfoPane, Marker, Stroke};
