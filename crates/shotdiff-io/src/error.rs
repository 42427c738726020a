//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. The PNG
//! and base64 codecs map their library errors into `IoError` variants so
//! that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not in a supported image format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The encoded data is malformed
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The buffer could not be encoded
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. oversized dimensions)
    #[error("core error: {0}")]
    Core(#[from] shotdiff_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
