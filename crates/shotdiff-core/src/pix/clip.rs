//! Rectangle clipping operations
//!
//! Extracting rectangular sub-regions, either into a new buffer or in
//! place. Regions are clamped to the image first, so any rectangle is
//! accepted and an out-of-range one simply yields fewer pixels.

use super::Pix;
use crate::rect::Rect;

impl Pix {
    /// Extract a rectangular sub-region into a new image.
    ///
    /// The rectangle is clamped to the image bounds with
    /// [`Rect::clamp`] before copying; samples-per-pixel is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use shotdiff_core::{Pix, Rect};
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(Rect::new(80, 60, 50, 50));
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, rect: Rect) -> Pix {
        let safe = rect.clamp(self.size());
        let (x, y) = (safe.left as usize, safe.top as usize);
        let (w, h) = (safe.width as u32, safe.height as u32);

        let mut data = Vec::with_capacity(w as usize * h as usize);
        for row in y..y + h as usize {
            let line = self.row(row as u32);
            data.extend_from_slice(&line[x..x + w as usize]);
        }

        Pix {
            width: w,
            height: h,
            spp: self.spp,
            data,
        }
    }

    /// Crop the image in place to a rectangular sub-region.
    ///
    /// Same clamping as [`Pix::clip_rectangle`]; the buffer is replaced
    /// by the region's content.
    pub fn crop(&mut self, rect: Rect) {
        *self = self.clip_rectangle(rect);
    }
}
