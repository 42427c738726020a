//! Error types for the image handle

use shotdiff_io::IoError;
use thiserror::Error;

/// Error type for image handle operations
#[derive(Error, Debug)]
pub enum ImageError {
    /// Input bytes or base64 text do not decode to a supported image
    #[error("decode error: {0}")]
    Decode(String),

    /// The buffer could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A scale factor that cannot map logical units to pixels
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] shotdiff_core::Error),
}

impl From<IoError> for ImageError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(e) => ImageError::Io(e),
            IoError::DecodeError(msg) => ImageError::Decode(msg),
            IoError::UnsupportedFormat(fmt) => {
                ImageError::Decode(format!("unsupported format: {fmt}"))
            }
            IoError::EncodeError(msg) => ImageError::Encode(msg),
            IoError::Core(e) => ImageError::Core(e),
        }
    }
}

/// Result type alias for image handle operations
pub type ImageResult<T> = Result<T, ImageError>;
