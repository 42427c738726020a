//! Canvas resizing and pasting
//!
//! These are the two primitives behind vertical stitching: grow the
//! canvas, then paste another image into the new area.

use super::{Pix, pixel_count};
use crate::error::Result;
use crate::rect::Rect;

impl Pix {
    /// Resize the canvas, keeping existing content anchored top-left.
    ///
    /// Content outside the new extent is dropped; newly exposed area is
    /// transparent black. Growing the canvas switches the buffer to 4
    /// samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if the new pixel count
    /// overflows.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        let mut data = vec![0u32; pixel_count(width, height)?];

        let copy_w = self.width.min(width) as usize;
        let copy_h = self.height.min(height);
        for y in 0..copy_h {
            let dst = y as usize * width as usize;
            data[dst..dst + copy_w].copy_from_slice(&self.row(y)[..copy_w]);
        }

        if width > self.width || height > self.height {
            self.spp = 4;
        }
        self.width = width;
        self.height = height;
        self.data = data;
        Ok(())
    }

    /// Paste `src` with its top-left corner at (x, y).
    ///
    /// Parts of `src` falling outside this image are clipped. Returns the
    /// destination rectangle actually written, which is empty when the
    /// two images do not overlap.
    pub fn insert(&mut self, src: &Pix, x: i32, y: i32) -> Rect {
        // Clip both edges: left/top by shifting into src, right/bottom by clamping
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(src.height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return Rect::default();
        }

        let w = (x1 - x0) as usize;
        let sx = (x0 - i64::from(x)) as usize;
        for dy in y0..y1 {
            let sy = (dy - i64::from(y)) as u32;
            let line = &src.row(sy)[sx..sx + w];
            self.row_mut(dy as u32)[x0 as usize..x0 as usize + w].copy_from_slice(line);
        }
        if src.spp == 4 {
            self.spp = 4;
        }

        Rect::new(x0 as i32, y0 as i32, w as i32, (y1 - y0) as i32)
    }
}
