//! Error types for treasure-core
//!
//! Provides a unified error type for the grid, geometry and region
//! containers. Each variant carries enough context for diagnostics.

use thiserror::Error;

/// Treasure-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two co-registered inputs disagree on their size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Wrong number of channels per pixel (e.g. a color triple was expected)
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelCount { expected: usize, actual: usize },

    /// Region construction with no pixels
    #[error("region {id} has no pixels")]
    EmptyRegion { id: u32 },

    /// Region id 0 is reserved for the background
    #[error("region id 0 is reserved for the background")]
    ReservedRegionId,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for treasure-core operations
pub type Result<T> = std::result::Result<T, Error>;
