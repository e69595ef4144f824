//! Error types for treasure-render

use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] treasure_core::Error),

    /// Invalid rendering option
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
