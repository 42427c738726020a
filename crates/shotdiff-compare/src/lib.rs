//! shotdiff-compare - Screenshot comparison
//!
//! Two async operations over image files:
//!
//! - [`compare`] resolves to a pass/fail verdict
//! - [`build_diff`] additionally writes a diff image with every
//!   differing pixel painted in a caller-chosen color
//!
//! Both run a percentage-threshold diff with the threshold fixed at 1%
//! of the compared pixels; the per-call tolerance moves the per-pixel
//! color distance instead. The pixel work happens behind the
//! [`DiffEngine`] trait so runners can plug in another backend through
//! [`Comparator::with_engine`].
//!
//! Errors are never folded into the verdict: an unreadable file or a
//! failed engine run is a [`CompareError`], a mismatch is `Ok(false)`.

mod compare;
pub mod engine;
mod error;

pub use compare::{CompareOptions, Comparator, DiffOptions, build_diff, compare};
pub use engine::{DiffConfig, DiffEngine, DiffRequest, DiffResult, DiffStatus, PixelDiffEngine, ThresholdType};
pub use error::{CompareError, CompareResult};
