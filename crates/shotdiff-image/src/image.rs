//! The screenshot image handle

use crate::error::{ImageError, ImageResult};
use crate::options::{ClearOptions, CropOptions};
use shotdiff_core::{Pix, Rect, Rgba, Size};
use std::path::Path;

/// A decoded screenshot.
///
/// Owns exactly one pixel buffer. Region operations take rects in
/// logical units, scale them by the options' device pixel ratio and
/// clamp them to the current size, so any rect is accepted. Mutations
/// happen in place and require `&mut self`.
///
/// # Examples
///
/// ```
/// use shotdiff_core::{Pix, Rect, Rgba};
/// use shotdiff_image::{ClearOptions, Image};
///
/// let mut image = Image::from_pix(Pix::new(100, 100).unwrap());
/// image.clear(Rect::new(0, 0, 10, 10), ClearOptions::default()).unwrap();
/// assert_eq!(image.get_rgba(5, 5).unwrap(), Rgba::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pix: Pix,
}

impl Image {
    /// Wrap an existing pixel buffer.
    pub fn from_pix(pix: Pix) -> Self {
        Self { pix }
    }

    /// Decode an encoded (PNG) buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Decode`] if the bytes are not a valid PNG.
    pub fn from_bytes(data: &[u8]) -> ImageResult<Self> {
        let pix = shotdiff_io::read_image_mem(data)?;
        log::trace!("decoded {}x{} image", pix.width(), pix.height());
        Ok(Self { pix })
    }

    /// Decode a base64-encoded PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Decode`] if the text is not valid base64 or
    /// the decoded bytes are not a valid PNG.
    pub fn from_base64(encoded: &str) -> ImageResult<Self> {
        let data = shotdiff_io::decode_base64(encoded)?;
        Self::from_bytes(&data)
    }

    /// Read and decode a PNG file.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        Self::from_bytes(&data)
    }

    /// Current pixel dimensions.
    pub fn size(&self) -> Size {
        self.pix.size()
    }

    /// Read one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Core`] wrapping `IndexOutOfBounds` outside
    /// the image.
    pub fn get_rgba(&self, x: u32, y: u32) -> ImageResult<Rgba> {
        Ok(self.pix.get_rgba(x, y)?)
    }

    /// Borrow the underlying pixel buffer.
    pub fn pix(&self) -> &Pix {
        &self.pix
    }

    /// Take the underlying pixel buffer.
    pub fn into_pix(self) -> Pix {
        self.pix
    }

    /// Crop to a region, replacing the buffer with the region's content.
    ///
    /// The rect is scaled by `opts.scale_factor` and then clamped, so an
    /// overhanging rect crops to the part that exists. Completes without
    /// suspending; it is async so callers are ready for decoders that
    /// need to.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidScaleFactor`] for a non-finite or
    /// non-positive scale factor.
    pub async fn crop(&mut self, rect: Rect, opts: CropOptions) -> ImageResult<&mut Self> {
        let safe = self.pixel_rect(rect, opts.scale_factor)?;
        log::debug!(
            "crop {}x{} image to {:?} (requested {:?} at {}x)",
            self.pix.width(),
            self.pix.height(),
            safe,
            rect,
            opts.scale_factor
        );
        self.pix.crop(safe);
        Ok(self)
    }

    /// Fill a region with `opts.color` (opaque black by default).
    ///
    /// Same scaling and clamping as [`Image::crop`].
    pub fn clear(&mut self, rect: Rect, opts: ClearOptions) -> ImageResult<()> {
        let safe = self.pixel_rect(rect, opts.scale_factor)?;
        log::debug!("clear {:?} with {}", safe, opts.color);
        self.pix.fill_rect(safe, opts.color);
        Ok(())
    }

    /// Stitch `other` below this image.
    ///
    /// The canvas grows to `width x (height + other.height)` and `other`
    /// is pasted at `(0, height)`. The width stays this image's width: a
    /// wider `other` is clipped on the right, a narrower one leaves the
    /// remainder of its rows transparent.
    pub fn join(&mut self, other: &Image) -> ImageResult<&mut Self> {
        let Size { width, height } = self.size();
        let other_size = other.size();
        if other_size.width != width {
            log::debug!(
                "join width mismatch: canvas {} px, appended {} px",
                width,
                other_size.width
            );
        }
        let new_height = height.checked_add(other_size.height).ok_or(
            shotdiff_core::Error::InvalidDimension {
                width,
                height: u32::MAX,
            },
        )?;

        self.pix.set_size(width, new_height)?;
        let offset = i32::try_from(height).map_err(|_| shotdiff_core::Error::InvalidDimension {
            width,
            height: new_height,
        })?;
        self.pix.insert(&other.pix, 0, offset);
        log::debug!("joined image, now {}x{}", width, new_height);
        Ok(self)
    }

    /// Encode as PNG in memory.
    pub fn to_png_bytes(&self) -> ImageResult<Vec<u8>> {
        Ok(shotdiff_io::write_image_mem(&self.pix)?)
    }

    /// Encode as PNG and write to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Io`] if the file cannot be written and
    /// [`ImageError::Encode`] for an empty image.
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        tokio::fs::write(path, &bytes).await?;
        log::debug!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Serialize a color as a hex string.
    pub fn color_to_string(color: Rgba) -> String {
        color.to_string()
    }

    /// Parse a hex color string.
    pub fn string_to_color(s: &str) -> ImageResult<Rgba> {
        Ok(s.parse()?)
    }

    fn pixel_rect(&self, rect: Rect, scale_factor: f64) -> ImageResult<Rect> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(ImageError::InvalidScaleFactor(scale_factor));
        }
        Ok(rect.scale(scale_factor).clamp(self.size()))
    }
}

impl From<Pix> for Image {
    fn from(pix: Pix) -> Self {
        Self::from_pix(pix)
    }
}
