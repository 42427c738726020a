//! Region fills

use super::Pix;
use crate::color::Rgba;
use crate::rect::Rect;

impl Pix {
    /// Fill a rectangle with a solid color.
    ///
    /// The rectangle is clamped to the image; pixels outside are never
    /// touched. Filling with a non-opaque color switches the buffer to
    /// 4 samples per pixel.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let safe = rect.clamp(self.size());
        if safe.is_empty() {
            return;
        }
        let val = color.to_pixel();
        let (x, w) = (safe.left as usize, safe.width as usize);
        for y in safe.top..safe.bottom() {
            self.row_mut(y as u32)[x..x + w].fill(val);
        }
        if !color.is_opaque() {
            self.spp = 4;
        }
    }

    /// Set every pixel to one color.
    pub fn set_all(&mut self, color: Rgba) {
        self.data.fill(color.to_pixel());
        self.spp = if color.is_opaque() { 3 } else { 4 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clamped() {
        let mut pix = Pix::new(4, 4).unwrap();
        pix.set_all(Rgba::WHITE);
        pix.fill_rect(Rect::new(2, 2, 10, 10), Rgba::BLACK);

        let black = Rgba::BLACK.to_pixel();
        let white = Rgba::WHITE.to_pixel();
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x >= 2 && y >= 2 { black } else { white };
                assert_eq!(pix.get_pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_rect_negative_is_noop() {
        let mut pix = Pix::new(4, 4).unwrap();
        pix.set_all(Rgba::WHITE);
        let before = pix.clone();
        pix.fill_rect(Rect::new(1, 1, -3, 2), Rgba::BLACK);
        assert_eq!(pix, before);
    }

    #[test]
    fn test_set_all_tracks_alpha() {
        let mut pix = Pix::new(2, 2).unwrap();
        pix.set_all(Rgba::WHITE);
        assert_eq!(pix.spp(), 3);
        pix.set_all(Rgba::TRANSPARENT);
        assert_eq!(pix.spp(), 4);
    }
}
