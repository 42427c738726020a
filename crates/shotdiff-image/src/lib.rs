//! shotdiff-image - The screenshot image handle
//!
//! [`Image`] wraps one decoded pixel buffer and exposes the region
//! operations a visual regression runner needs before comparing
//! screenshots:
//!
//! - [`Image::crop`] to the element under test
//! - [`Image::clear`] regions that are expected to change (carets,
//!   timestamps, animations)
//! - [`Image::join`] viewport captures of a tall page into one image
//! - [`Image::save`] the result for the comparator
//!
//! Rects are given in logical units and converted with a device pixel
//! ratio from [`CropOptions`] / [`ClearOptions`].

mod error;
mod image;
mod options;

pub use error::{ImageError, ImageResult};
pub use image::Image;
pub use options::{ClearOptions, CropOptions};
