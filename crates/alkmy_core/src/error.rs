//! Core error types

use thiserror::Error;

/// Errors raised while interpreting core primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A direction string did not name a known direction
    #[error("Unknown direction: {0} (expected left, right, up or down)")]
    UnknownDirection(String),

    /// A numeric input was NaN or infinite
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
