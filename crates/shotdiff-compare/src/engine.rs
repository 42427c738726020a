//! The diff engine
//!
//! A [`DiffEngine`] takes two image paths and a [`DiffConfig`], counts
//! the pixels that differ by more than `delta`, classifies the count
//! against a threshold, and optionally renders a diff image. The
//! comparator only talks to this trait; [`PixelDiffEngine`] is the
//! built-in implementation.
//!
//! # Classification
//!
//! - no differing pixels: [`DiffStatus::Identical`]
//! - differing pixels below the threshold: [`DiffStatus::Similar`]
//! - at or above the threshold: [`DiffStatus::Different`]
//!
//! In [`ThresholdType::Percent`] mode the threshold is a fraction of the
//! compared pixel count, in [`ThresholdType::Pixel`] mode an absolute
//! count. Images of different sizes are compared over the union of
//! their extents; a pixel present in only one image always differs.

use crate::error::{CompareError, CompareResult};
use shotdiff_core::{Pix, Rgba, color};
use std::path::{Path, PathBuf};

/// How [`DiffConfig::threshold`] is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdType {
    /// Fraction of all compared pixels (0.01 = 1%)
    #[default]
    Percent,
    /// Absolute number of pixels
    Pixel,
}

/// Engine parameters for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffConfig {
    pub threshold_type: ThresholdType,
    /// Differing-pixel budget before images count as different
    pub threshold: f64,
    /// Largest per-pixel RGBA distance still treated as equal
    pub delta: f64,
    /// Color painted over differing pixels in the diff image
    pub output_mask: Rgba,
    /// Render `[reference | diff | current]` instead of the diff alone
    pub composition: bool,
}

impl DiffConfig {
    /// Base threshold: 1% of all pixels
    pub const DEFAULT_THRESHOLD: f64 = 0.01;
    /// Per-pixel distance used when no tolerance is given
    pub const DEFAULT_DELTA: f64 = 20.0;
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            threshold_type: ThresholdType::Percent,
            threshold: Self::DEFAULT_THRESHOLD,
            delta: Self::DEFAULT_DELTA,
            output_mask: Rgba::rgb(255, 0, 0),
            composition: false,
        }
    }
}

/// Outcome classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    Unknown,
    Different,
    Identical,
    Similar,
}

impl DiffStatus {
    /// Numeric status code, stable across versions
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Different => 1,
            Self::Identical => 5,
            Self::Similar => 7,
        }
    }

    /// Check if the status counts as a match
    pub fn passed(self) -> bool {
        matches!(self, Self::Identical | Self::Similar)
    }
}

/// Result of a diff run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffResult {
    pub status: DiffStatus,
    /// Number of differing pixels
    pub differences: u64,
    /// Number of compared pixels
    pub dimension: u64,
    /// Width of the compared extent
    pub width: u32,
    /// Height of the compared extent
    pub height: u32,
}

impl DiffResult {
    /// Check if the images match within the threshold
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    /// Fraction of compared pixels that differ (0.0 to 1.0)
    pub fn diff_ratio(&self) -> f64 {
        if self.dimension == 0 {
            0.0
        } else {
            self.differences as f64 / self.dimension as f64
        }
    }
}

/// Everything an engine needs for one run
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRequest {
    pub image_a: PathBuf,
    pub image_b: PathBuf,
    /// Where to write the diff image, if one is wanted
    pub output: Option<PathBuf>,
    pub config: DiffConfig,
}

/// A pixel diff backend
///
/// Implementations run synchronously; the comparator moves each run
/// onto a blocking thread and resolves exactly once with its result.
pub trait DiffEngine: Send + Sync {
    /// Compare the two images of `request`, writing the diff image to
    /// `request.output` when set.
    fn run(&self, request: &DiffRequest) -> CompareResult<DiffResult>;
}

/// Built-in engine comparing decoded PNG files pixel by pixel
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelDiffEngine;

impl PixelDiffEngine {
    /// Compare two in-memory images.
    ///
    /// Returns the classification and, when `render` is set, the diff
    /// image described by `config`.
    pub fn diff_pix(
        &self,
        a: &Pix,
        b: &Pix,
        config: &DiffConfig,
        render: bool,
    ) -> CompareResult<(DiffResult, Option<Pix>)> {
        let width = a.width().max(b.width());
        let height = a.height().max(b.height());
        let dimension = u64::from(width) * u64::from(height);
        let delta_sq = config.delta * config.delta;

        let mut mask = render.then(|| vec![false; width as usize * height as usize]);
        let mut differences = 0u64;
        for y in 0..height {
            for x in 0..width {
                let differs = match (a.get_pixel(x, y), b.get_pixel(x, y)) {
                    (Some(pa), Some(pb)) => distance_sq(pa, pb) > delta_sq,
                    _ => true,
                };
                if differs {
                    differences += 1;
                    if let Some(mask) = mask.as_mut() {
                        mask[y as usize * width as usize + x as usize] = true;
                    }
                }
            }
        }

        let status = classify(differences, dimension, config);
        let result = DiffResult {
            status,
            differences,
            dimension,
            width,
            height,
        };
        let image = match mask {
            Some(mask) => Some(render_diff(a, b, width, height, &mask, config)?),
            None => None,
        };
        Ok((result, image))
    }
}

impl DiffEngine for PixelDiffEngine {
    fn run(&self, request: &DiffRequest) -> CompareResult<DiffResult> {
        let a = load(&request.image_a)?;
        let b = load(&request.image_b)?;

        let (result, image) = self.diff_pix(&a, &b, &request.config, request.output.is_some())?;
        log::debug!(
            "diff {} vs {}: {:?}, {} of {} pixels differ",
            request.image_a.display(),
            request.image_b.display(),
            result.status,
            result.differences,
            result.dimension
        );

        if let (Some(path), Some(image)) = (request.output.as_ref(), image) {
            shotdiff_io::write_image(&image, path).map_err(|e| CompareError::Write {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(result)
    }
}

fn load(path: &Path) -> CompareResult<Pix> {
    shotdiff_io::read_image(path).map_err(|e| match e {
        shotdiff_io::IoError::Io(source) => CompareError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => CompareError::Decode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

/// Squared Euclidean distance over the RGBA channels
#[inline]
fn distance_sq(pa: u32, pb: u32) -> f64 {
    let (r1, g1, b1, a1) = color::extract_rgba(pa);
    let (r2, g2, b2, a2) = color::extract_rgba(pb);
    [(r1, r2), (g1, g2), (b1, b2), (a1, a2)]
        .iter()
        .map(|&(c1, c2)| {
            let d = f64::from(c1) - f64::from(c2);
            d * d
        })
        .sum()
}

fn classify(differences: u64, dimension: u64, config: &DiffConfig) -> DiffStatus {
    if differences == 0 {
        return DiffStatus::Identical;
    }
    let above = match config.threshold_type {
        ThresholdType::Percent => differences as f64 / dimension as f64 >= config.threshold,
        ThresholdType::Pixel => differences as f64 >= config.threshold,
    };
    if above {
        DiffStatus::Different
    } else {
        DiffStatus::Similar
    }
}

/// Reference pixels with every differing pixel painted in the mask color,
/// optionally flanked by both inputs.
fn render_diff(
    a: &Pix,
    b: &Pix,
    width: u32,
    height: u32,
    mask: &[bool],
    config: &DiffConfig,
) -> CompareResult<Pix> {
    let canvas = |w: u32, h: u32| Pix::new(w, h).map_err(|e| CompareError::Engine(e.to_string()));

    let mut diff = canvas(width, height)?;
    diff.insert(a, 0, 0);
    let paint = config.output_mask.to_pixel();
    for (i, _) in mask.iter().enumerate().filter(|(_, differs)| **differs) {
        let (x, y) = (i % width as usize, i / width as usize);
        diff.set_pixel_unchecked(x as u32, y as u32, paint);
    }

    if !config.composition {
        return Ok(diff);
    }

    let total = a
        .width()
        .checked_add(width)
        .and_then(|w| w.checked_add(b.width()))
        .ok_or_else(|| CompareError::Engine("composition too wide".to_string()))?;
    let mut strip = canvas(total, height)?;
    strip.insert(a, 0, 0);
    strip.insert(&diff, offset(a.width())?, 0);
    strip.insert(b, offset(a.width() + width)?, 0);
    Ok(strip)
}

fn offset(x: u32) -> CompareResult<i32> {
    i32::try_from(x).map_err(|_| CompareError::Engine(format!("offset {x} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotdiff_core::Rect;

    fn solid(w: u32, h: u32, color: Rgba) -> Pix {
        let mut pix = Pix::new(w, h).unwrap();
        pix.set_all(color);
        pix
    }

    #[test]
    fn test_identical() {
        let a = solid(10, 10, Rgba::WHITE);
        let (r, img) = PixelDiffEngine
            .diff_pix(&a, &a.clone(), &DiffConfig::default(), false)
            .unwrap();
        assert_eq!(r.status, DiffStatus::Identical);
        assert_eq!(r.dimension, 100);
        assert!(r.passed());
        assert!(img.is_none());
    }

    #[test]
    fn test_small_change_within_delta() {
        let a = solid(4, 4, Rgba::rgb(100, 100, 100));
        let b = solid(4, 4, Rgba::rgb(110, 100, 100));
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &DiffConfig::default(), false).unwrap();
        assert_eq!(r.status, DiffStatus::Identical);

        let strict = DiffConfig {
            delta: 0.0,
            ..DiffConfig::default()
        };
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &strict, false).unwrap();
        assert_eq!(r.status, DiffStatus::Different);
        assert_eq!(r.differences, 16);
    }

    #[test]
    fn test_similar_below_percent_threshold() {
        let a = solid(100, 100, Rgba::WHITE);
        let mut b = a.clone();
        // 99 of 10000 pixels: just under 1%
        b.fill_rect(Rect::new(0, 0, 99, 1), Rgba::BLACK);
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &DiffConfig::default(), false).unwrap();
        assert_eq!(r.status, DiffStatus::Similar);
        assert!(r.passed());

        // exactly 1% is already different
        b.fill_rect(Rect::new(99, 0, 1, 1), Rgba::BLACK);
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &DiffConfig::default(), false).unwrap();
        assert_eq!(r.status, DiffStatus::Different);
        assert!(!r.passed());
    }

    #[test]
    fn test_pixel_threshold() {
        let a = solid(10, 10, Rgba::WHITE);
        let mut b = a.clone();
        b.fill_rect(Rect::new(0, 0, 3, 1), Rgba::BLACK);
        let config = DiffConfig {
            threshold_type: ThresholdType::Pixel,
            threshold: 4.0,
            ..DiffConfig::default()
        };
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &config, false).unwrap();
        assert_eq!(r.status, DiffStatus::Similar);
        assert_eq!(r.differences, 3);
    }

    #[test]
    fn test_size_mismatch_counts_missing_pixels() {
        let a = solid(10, 10, Rgba::WHITE);
        let b = solid(10, 12, Rgba::WHITE);
        let (r, _) = PixelDiffEngine.diff_pix(&a, &b, &DiffConfig::default(), false).unwrap();
        assert_eq!((r.width, r.height), (10, 12));
        assert_eq!(r.differences, 20);
        assert_eq!(r.status, DiffStatus::Different);
    }

    #[test]
    fn test_render_marks_only_differences() {
        let a = solid(6, 6, Rgba::WHITE);
        let mut b = a.clone();
        b.fill_rect(Rect::new(2, 2, 2, 2), Rgba::BLACK);
        let config = DiffConfig {
            output_mask: Rgba::rgb(0, 0, 255),
            ..DiffConfig::default()
        };
        let (_, img) = PixelDiffEngine.diff_pix(&a, &b, &config, true).unwrap();
        let img = img.unwrap();
        assert_eq!(img.size(), a.size());
        assert_eq!(img.get_rgba(2, 2).unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(img.get_rgba(3, 3).unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(img.get_rgba(0, 0).unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_render_composition_strip() {
        let a = solid(4, 3, Rgba::WHITE);
        let b = solid(4, 3, Rgba::BLACK);
        let config = DiffConfig {
            composition: true,
            ..DiffConfig::default()
        };
        let (_, img) = PixelDiffEngine.diff_pix(&a, &b, &config, true).unwrap();
        let img = img.unwrap();
        assert_eq!((img.width(), img.height()), (12, 3));
        assert_eq!(img.get_rgba(0, 0).unwrap(), Rgba::WHITE);
        assert_eq!(img.get_rgba(5, 0).unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(img.get_rgba(11, 2).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DiffStatus::Identical.code(), 5);
        assert_eq!(DiffStatus::Similar.code(), 7);
        assert!(!DiffStatus::Unknown.passed());
    }
}
