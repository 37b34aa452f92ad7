//! Marquee configuration errors

use alkmy_core::CoreError;
use thiserror::Error;

/// Errors reported while loading or validating a loop configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Gap between items was negative or not finite
    #[error("Gap must be a non-negative number of pixels, got {0}")]
    InvalidGap(f32),

    /// Item height was negative or not finite
    #[error("Item height must be a non-negative number of pixels, got {0}")]
    InvalidItemHeight(f32),

    /// Fixed container width was zero, negative or not finite
    #[error("Container width must be positive, got {0}")]
    InvalidWidth(f32),

    /// Width keyword was not recognised
    #[error("Unknown container width: {0} (expected a number of pixels or \"fill\")")]
    UnknownWidth(String),

    /// An item has neither an image source nor a node id
    #[error("Item {0} has an empty visual source")]
    EmptySource(usize),

    /// TOML could not be parsed
    #[error("Invalid loop configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Speed, hover speed or another core value was rejected
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for marquee configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
