//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use shotdiff_core::{Pix, color};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Every PNG color type is normalized to 8-bit RGBA pixels: palettes
/// and low bit depths are expanded, 16-bit samples are stripped to their
/// high byte and gray is replicated across the color channels. Images
/// without an alpha channel are marked 3 samples per pixel.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let (samples, spp) = match output_info.color_type {
        ColorType::Grayscale => (1, 3),
        ColorType::GrayscaleAlpha => (2, 4),
        ColorType::Rgb => (3, 3),
        ColorType::Rgba => (4, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output format: {:?} {:?}",
                other, output_info.bit_depth
            )));
        }
    };

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let s = &row[x * samples..x * samples + samples];
            let pixel = match samples {
                1 => color::compose_rgba(s[0], s[0], s[0], 255),
                2 => color::compose_rgba(s[0], s[0], s[0], s[1]),
                3 => color::compose_rgba(s[0], s[1], s[2], 255),
                _ => color::compose_rgba(s[0], s[1], s[2], s[3]),
            };
            pixels.push(pixel);
        }
    }

    Ok(Pix::from_raw(width, height, spp, pixels)?)
}

/// Write a PNG image
///
/// Buffers with 4 samples per pixel are written as RGBA, others as RGB.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for an empty (zero-area) image, which
/// PNG cannot represent, or if the encoder fails.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();
    if pix.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode empty {}x{} image as PNG",
            width, height
        )));
    }

    let with_alpha = pix.spp() == 4;
    let color_type = if with_alpha {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let samples = if with_alpha { 4 } else { 3 };
    let mut data = Vec::with_capacity(pix.data().len() * samples);
    for &pixel in pix.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b]);
        if with_alpha {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
