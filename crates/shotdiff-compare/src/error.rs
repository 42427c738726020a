//! Error types for comparison
//!
//! A failed comparison run is never reported as a mismatch: reading,
//! decoding and engine failures each have their own variant, distinct
//! from a `false` verdict.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for comparison operations
#[derive(Error, Debug)]
pub enum CompareError {
    /// An input image could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input image is not a decodable PNG
    #[error("cannot decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// The diff image could not be written
    #[error("cannot write diff image {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// The diff engine failed internally
    #[error("diff engine failed: {0}")]
    Engine(String),

    /// `build_diff` was called without a diff color
    #[error("a diff color is required to build a diff image")]
    MissingDiffColor,

    /// The diff color string does not parse
    #[error("invalid diff color: {0}")]
    InvalidColor(#[source] shotdiff_core::Error),

    /// Tolerance is negative or not a number
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}

impl CompareError {
    /// Check if the error is a caller configuration mistake rather than
    /// a failure while running the comparison
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingDiffColor | Self::InvalidColor(_) | Self::InvalidTolerance(_)
        )
    }
}

/// Result type alias for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
