//! shotdiff-io - Image I/O for shotdiff
//!
//! Decodes encoded bytes, base64 strings and files into [`Pix`] buffers
//! and encodes them back. PNG is the only pixel format; other common
//! formats are detected by signature and rejected with
//! [`IoError::UnsupportedFormat`].

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use base64::{Engine as _, engine::general_purpose};
use shotdiff_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

/// Decode an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        ImageFormat::Unknown => Err(IoError::DecodeError(
            "data is not a recognized image".to_string(),
        )),
        other => Err(IoError::UnsupportedFormat(other.extension().to_string())),
    }
}

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    log::trace!("reading image {}", path.display());
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 12];
    let n = read_prefix(&mut reader, &mut header)?;
    match detect_format_from_bytes(&header[..n])? {
        ImageFormat::Png => {
            reader.rewind()?;
            png::read_png(reader)
        }
        ImageFormat::Unknown => Err(IoError::DecodeError(format!(
            "{} is not a recognized image",
            path.display()
        ))),
        other => Err(IoError::UnsupportedFormat(other.extension().to_string())),
    }
}

fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Encode an image as PNG into memory.
pub fn write_image_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    png::write_png(pix, &mut buffer)?;
    Ok(buffer)
}

/// Write an image to a file path as PNG.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    log::trace!(
        "writing {}x{} image to {}",
        pix.width(),
        pix.height(),
        path.display()
    );
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    png::write_png(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Decode a base64 string into raw bytes.
///
/// Accepts the standard alphabet with padding, tolerates embedded
/// whitespace (line-wrapped payloads) and strips a leading
/// `data:<mime>;base64,` prefix.
pub fn decode_base64(encoded: &str) -> IoResult<Vec<u8>> {
    let payload = match encoded.trim_start().strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| IoError::DecodeError("data URL is not base64-encoded".to_string()))?,
        None => encoded,
    };
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| IoError::DecodeError(format!("base64 decode error: {}", e)))
}

/// Encode raw bytes as a standard base64 string.
pub fn encode_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}
