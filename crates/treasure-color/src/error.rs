//! Error types for treasure-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] treasure_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Histogram without samples
    #[error("empty histogram: no samples to select a threshold from")]
    EmptyHistogram,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
