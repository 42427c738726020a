//! Pixel access functions
//!
//! Getting and setting individual pixels, either as packed `u32`
//! values or as [`Rgba`] colors.

use super::Pix;
use crate::color::Rgba;
use crate::error::{Error, Result};

impl Pix {
    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Get the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Result<Rgba> {
        self.get_pixel(x, y)
            .map(Rgba::from_pixel)
            .ok_or(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let i = self.index(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = y as usize * self.width as usize + x as usize;
        self.data[i] = val;
    }

    /// Set the color at (x, y).
    ///
    /// A non-opaque color switches the buffer to 4 samples per pixel so
    /// the alpha survives encoding.
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())?;
        if !color.is_opaque() {
            self.spp = 4;
        }
        Ok(())
    }
}
