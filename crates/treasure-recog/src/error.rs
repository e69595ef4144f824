//! Error types for treasure-recog

use thiserror::Error;
use treasure_core::Centroid;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] treasure_core::Error),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] treasure_region::RegionError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The image does not hold exactly one start arrow
    #[error("expected exactly one start arrow, found {found}")]
    AmbiguousStart { found: usize },

    /// The walk reached an arrow whose cone holds neither an arrow nor a
    /// treasure candidate
    #[error(
        "no path to a treasure: stuck at arrow ({}, {}) after {steps} steps",
        .from.x,
        .from.y
    )]
    PathNotFound { from: Centroid, steps: usize },
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
