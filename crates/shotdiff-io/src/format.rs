//! Image format detection
//!
//! Detects image formats by examining magic numbers in the header. Only
//! PNG can be decoded; the other signatures are recognized so that a
//! wrong input produces a precise error instead of a generic decode
//! failure.

use crate::{IoError, IoResult};

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// GIF87a / GIF89a share this prefix
    pub const GIF: &[u8] = b"GIF8";

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    WebP,
    Unknown,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
            Self::Unknown => "dat",
        }
    }
}

/// Detect image format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::DecodeError(
            "not enough data to detect format".to_string(),
        ));
    }

    let format = if data.starts_with(magic::PNG) {
        ImageFormat::Png
    } else if data.starts_with(magic::JPEG) {
        ImageFormat::Jpeg
    } else if data.starts_with(magic::GIF) {
        ImageFormat::Gif
    } else if data.starts_with(magic::BMP) {
        ImageFormat::Bmp
    } else if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        ImageFormat::WebP
    } else {
        ImageFormat::Unknown
    };
    Ok(format)
}
