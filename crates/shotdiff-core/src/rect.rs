//! Rect, Size - Rectangle regions and image extents
//!
//! A [`Rect`] requested by a caller may lie partly or wholly outside an
//! image, may have negative coordinates, and may be expressed in logical
//! (device-independent) units. Two pure functions turn it into something
//! a pixel buffer can act on:
//!
//! - [`Rect::scale`] converts logical units to raw pixels
//! - [`Rect::clamp`] narrows the result to the image bounds
//!
//! Clamping never fails. A nonsensical rectangle degenerates to a
//! zero-area rectangle at a clamped corner.

/// Full pixel extent of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check if either dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle region
///
/// Coordinates are in pixels (or logical units before scaling). Left/top
/// may be negative and width/height may be non-positive on input; only
/// the output of [`Rect::clamp`] is guaranteed to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub left: i32,
    /// Top y coordinate
    pub top: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect covering an entire image of the given size
    pub fn from_size(size: Size) -> Self {
        Self {
            left: 0,
            top: 0,
            width: to_i32(size.width),
            height: to_i32(size.height),
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Get the area, zero for non-positive extents
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Check if the rect covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if the rect already lies fully inside `bounds`
    pub fn is_within(&self, bounds: Size) -> bool {
        let bw = to_i32(bounds.width);
        let bh = to_i32(bounds.height);
        self.left >= 0
            && self.top >= 0
            && self.width >= 0
            && self.height >= 0
            && self.right() <= bw
            && self.bottom() <= bh
    }

    /// Clamp the rect to image bounds.
    ///
    /// The origin is clamped to `[0, bounds.width] x [0, bounds.height]`
    /// first, then width and height are clamped to `[0, remaining extent]`
    /// from that origin. The origin is not shifted to compensate for a
    /// negative left/top: `{-10, 0, 20, 20}` on a 100x100 image becomes
    /// `{0, 0, 20, 20}`.
    ///
    /// The result always satisfies `0 <= left`, `0 <= top`,
    /// `left + width <= bounds.width` and `top + height <= bounds.height`.
    /// A rect already within bounds is returned unchanged, so the
    /// operation is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use shotdiff_core::{Rect, Size};
    ///
    /// let bounds = Size::new(100, 100);
    /// let safe = Rect::new(90, 90, 50, 50).clamp(bounds);
    /// assert_eq!(safe, Rect::new(90, 90, 10, 10));
    /// ```
    pub fn clamp(&self, bounds: Size) -> Rect {
        let bw = to_i32(bounds.width);
        let bh = to_i32(bounds.height);

        let left = self.left.clamp(0, bw);
        let top = self.top.clamp(0, bh);

        let width = self.width.clamp(0, bw - left);
        let height = self.height.clamp(0, bh - top);

        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// Scale every coordinate by `factor`.
    ///
    /// Used to convert a rect given in logical units into raw pixels
    /// for a given device pixel ratio. Each product is rounded to the
    /// nearest integer (half away from zero) and saturates at the `i32`
    /// range. A factor of 1 is the identity, and scaling composes
    /// exactly for integral factors.
    pub fn scale(&self, factor: f64) -> Rect {
        Rect {
            left: scale_coord(self.left, factor),
            top: scale_coord(self.top, factor),
            width: scale_coord(self.width, factor),
            height: scale_coord(self.height, factor),
        }
    }
}

#[inline]
fn scale_coord(v: i32, factor: f64) -> i32 {
    // float-to-int `as` saturates and maps NaN to 0
    (f64::from(v) * factor).round() as i32
}

#[inline]
fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
