//! Error types for shotdiff-core
//!
//! Geometry itself never fails (rectangles are clamped, not rejected),
//! so the variants here cover buffer construction, pixel addressing and
//! color parsing.

use thiserror::Error;

/// shotdiff-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Requested buffer dimensions cannot be allocated
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unparseable color string
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
