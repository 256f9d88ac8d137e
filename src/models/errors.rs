use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Grid dimensions that cannot produce valid boundaries
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Degree value that is not a cardinal direction
    #[error("Invalid heading: {0} is not a multiple of 90 degrees")]
    InvalidHeading(i32),
    /// Speed outside the dial range
    #[error("Invalid speed: {0} is outside 1-10")]
    InvalidSpeed(i32),
    /// Unrecognised scripted input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
