//! PIX - The owned pixel buffer
//!
//! `Pix` holds one decoded image as 32-bit RGBA pixels. It is the buffer
//! engine the image handle drives: pixel access, cropping, rectangle
//! fills, canvas resizing and pasting all live on it.
//!
//! # Pixel layout
//!
//! - One `u32` per pixel, rows stored top to bottom without padding
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! A `Pix` exclusively owns its data. Mutating operations take
//! `&mut self`, so two handles can never alias one buffer; use
//! [`Clone`] for an independent copy.

mod access;
mod canvas;
mod clip;
mod fill;

use crate::error::{Error, Result};
use crate::rect::Size;

/// Main image container
///
/// # Examples
///
/// ```
/// use shotdiff_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel: 3 for opaque RGB, 4 when alpha is meaningful
    spp: u32,
    /// Pixel data, `width * height` entries
    data: Vec<u32>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// All pixels are initialized to transparent black. Zero width or
    /// height is allowed and yields an empty image (the result of a
    /// degenerate crop).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Ok(Pix {
            width,
            height,
            spp: 4,
            data: vec![0u32; len],
        })
    }

    /// Create a PIX from raw `0xRRGGBBAA` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len()` does not match
    /// `width * height`, or if `spp` is not 3 or 4.
    pub fn from_raw(width: u32, height: u32, spp: u32, data: Vec<u32>) -> Result<Self> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "pixel data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        if spp != 3 && spp != 4 {
            return Err(Error::InvalidParameter(format!(
                "samples per pixel must be 3 or 4, got {spp}"
            )));
        }
        Ok(Pix {
            width,
            height,
            spp,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image extent.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.spp
    }

    /// Set the samples per pixel (3 or 4).
    pub fn set_spp(&mut self, spp: u32) {
        self.spp = if spp == 3 { 3 } else { 4 };
    }

    /// Check if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    #[inline]
    fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width == other.width && self.height == other.height
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}
