//! Color channel helpers and the [`Rgba`] color type.
//!
//! # Pixel format
//!
//! 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//!
//! # String form
//!
//! [`Rgba`] serializes to `#rrggbb` when fully opaque and to `#rrggbbaa`
//! otherwise. Parsing accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or
//! without the leading `#`, in either case.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Extract RGBA values from a 32-bit pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the fill used when clearing regions
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    /// Fully transparent black, the content of freshly grown canvas
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack into the `0xRRGGBBAA` pixel layout.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// Unpack from the `0xRRGGBBAA` pixel layout.
    #[inline]
    pub fn from_pixel(pixel: u32) -> Self {
        let (r, g, b, a) = extract_rgba(pixel);
        Self { r, g, b, a }
    }

    /// The red/green/blue channel triple.
    #[inline]
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Check if the alpha channel is fully opaque
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| Error::InvalidColor(s.to_string()))
                };
                Ok(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}
