//! I/O error types
//!
//! Decoder and encoder failures from the `image` crate are mapped into
//! `IoError` variants so callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not enabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] treasure_core::Error),
}

/// Convenience alias for I/O results
pub type IoResult<T> = Result<T, IoError>;
