//! Per-operation options

use shotdiff_core::Rgba;

/// Options for [`crate::Image::crop`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Device pixel ratio the crop rect is expressed in
    pub scale_factor: f64,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

impl CropOptions {
    /// Options for a rect given in logical units on a `ratio` display
    pub fn scaled(ratio: f64) -> Self {
        Self {
            scale_factor: ratio,
        }
    }
}

/// Options for [`crate::Image::clear`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearOptions {
    /// Device pixel ratio the clear rect is expressed in
    pub scale_factor: f64,
    /// Fill color, opaque black unless overridden
    pub color: Rgba,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            color: Rgba::BLACK,
        }
    }
}

impl ClearOptions {
    /// Options for a rect given in logical units on a `ratio` display
    pub fn scaled(ratio: f64) -> Self {
        Self {
            scale_factor: ratio,
            ..Self::default()
        }
    }
}
