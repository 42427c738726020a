//! shotdiff - Screenshot processing for visual regression tests
//!
//! # Overview
//!
//! A test runner captures screenshots, narrows them to what matters and
//! compares them against a baseline:
//!
//! - Geometry: [`Rect`] clamping and device-pixel-ratio scaling
//! - Image handle: crop, clear, vertical join and PNG save
//!   ([`image::Image`])
//! - Comparison: pass/fail verdicts and diff images
//!   ([`compare::compare`], [`compare::build_diff`])
//!
//! # Example
//!
//! ```
//! use shotdiff::{Pix, Rect, Size};
//! use shotdiff::image::{ClearOptions, Image};
//!
//! let mut shot = Image::from_pix(Pix::new(200, 100).unwrap());
//! shot.clear(Rect::new(150, 80, 100, 100), ClearOptions::default())
//!     .unwrap();
//! assert_eq!(shot.size(), Size::new(200, 100));
//!
//! // out-of-bounds regions are clamped, never rejected
//! assert_eq!(
//!     Rect::new(150, 80, 100, 100).clamp(shot.size()),
//!     Rect::new(150, 80, 50, 20)
//! );
//! ```

// Re-export core types (geometry, colors and the pixel buffer)
pub use shotdiff_core::*;

// Re-export the other crates as modules to avoid name conflicts
pub use shotdiff_compare as compare;
pub use shotdiff_image as image;
pub use shotdiff_io as io;
