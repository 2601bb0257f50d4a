use thiserror::Error;

/// Errors raised by the board model.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates (y={y}, x={x}) are outside the board")]
    OutOfBounds { y: usize, x: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
