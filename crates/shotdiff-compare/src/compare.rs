//! Pass/fail comparison and diff image generation

use crate::engine::{DiffConfig, DiffEngine, DiffRequest, DiffResult, PixelDiffEngine, ThresholdType};
use crate::error::{CompareError, CompareResult};
use shotdiff_core::Rgba;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options for [`Comparator::compare`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompareOptions {
    /// Per-pixel color distance tolerated before a pixel counts as
    /// different. `None` uses [`DiffConfig::DEFAULT_DELTA`].
    pub tolerance: Option<f64>,
}

impl CompareOptions {
    /// Options with the given tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
        }
    }
}

/// Options for [`Comparator::build_diff`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiffOptions {
    /// Baseline screenshot
    pub reference: PathBuf,
    /// Screenshot under test
    pub current: PathBuf,
    /// Where the diff image is written
    pub diff_path: PathBuf,
    /// Same meaning as [`CompareOptions::tolerance`]
    pub tolerance: Option<f64>,
    /// Color for differing pixels, as a hex string (`#ff00ff`). Required.
    pub diff_color: Option<String>,
    /// Render `[reference | diff | current]` instead of the diff alone
    pub composition: bool,
}

impl DiffOptions {
    /// Options for a diff of `reference` against `current` written to
    /// `diff_path`, painted in `diff_color`
    pub fn new(
        reference: impl Into<PathBuf>,
        current: impl Into<PathBuf>,
        diff_path: impl Into<PathBuf>,
        diff_color: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            current: current.into(),
            diff_path: diff_path.into(),
            diff_color: Some(diff_color.into()),
            ..Self::default()
        }
    }
}

/// Compares screenshots through a [`DiffEngine`].
///
/// Holds no per-comparison state; one comparator can serve any number
/// of concurrent calls. Engine runs are synchronous and are moved onto
/// tokio's blocking pool, so both operations must be awaited inside a
/// tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use shotdiff_compare::{CompareOptions, Comparator};
///
/// # async fn run() -> shotdiff_compare::CompareResult<()> {
/// let comparator = Comparator::new();
/// let same = comparator
///     .compare("baseline.png", "current.png", CompareOptions::default())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Comparator<E: DiffEngine = PixelDiffEngine> {
    engine: Arc<E>,
}

impl Comparator {
    /// Create a comparator backed by [`PixelDiffEngine`]
    pub fn new() -> Self {
        Self::with_engine(PixelDiffEngine)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DiffEngine> Clone for Comparator<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E: DiffEngine + 'static> Comparator<E> {
    /// Create a comparator backed by a custom engine
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Borrow the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Check whether two screenshots match.
    ///
    /// The threshold is fixed at 1% of the compared pixels; `opts`
    /// only moves the per-pixel tolerance. Resolves to `true` for an
    /// identical or similar result and `false` for a different one.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Read`] or [`CompareError::Decode`] if
    /// either file cannot be loaded, [`CompareError::InvalidTolerance`]
    /// for a negative or non-finite tolerance, and
    /// [`CompareError::Engine`] if the engine itself fails. None of these
    /// is reported as a mismatch.
    pub async fn compare(
        &self,
        a: impl AsRef<Path>,
        b: impl AsRef<Path>,
        opts: CompareOptions,
    ) -> CompareResult<bool> {
        let request = DiffRequest {
            image_a: a.as_ref().to_path_buf(),
            image_b: b.as_ref().to_path_buf(),
            output: None,
            config: DiffConfig {
                delta: delta(opts.tolerance)?,
                ..base_config()
            },
        };
        let result = self.run(request).await?;
        log::debug!(
            "compare {} vs {}: {:?} ({:.4}% differ)",
            a.as_ref().display(),
            b.as_ref().display(),
            result.status,
            result.diff_ratio() * 100.0
        );
        Ok(result.passed())
    }

    /// Compare two screenshots and write a diff image.
    ///
    /// Differing pixels are painted in `opts.diff_color` (its alpha is
    /// ignored). The engine is not started unless every option is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::MissingDiffColor`] without a diff color,
    /// [`CompareError::InvalidColor`] if it does not parse,
    /// [`CompareError::Write`] if the diff image cannot be written, and
    /// the errors of [`Comparator::compare`] otherwise.
    pub async fn build_diff(&self, opts: DiffOptions) -> CompareResult<DiffResult> {
        let color = opts
            .diff_color
            .as_deref()
            .ok_or(CompareError::MissingDiffColor)?
            .parse::<Rgba>()
            .map_err(CompareError::InvalidColor)?;

        let request = DiffRequest {
            image_a: opts.reference,
            image_b: opts.current,
            output: Some(opts.diff_path),
            config: DiffConfig {
                delta: delta(opts.tolerance)?,
                output_mask: Rgba::rgb(color.r, color.g, color.b),
                composition: opts.composition,
                ..base_config()
            },
        };
        let result = self.run(request).await?;
        log::debug!(
            "diff image written: {:?}, {} of {} pixels differ",
            result.status,
            result.differences,
            result.dimension
        );
        Ok(result)
    }

    async fn run(&self, request: DiffRequest) -> CompareResult<DiffResult> {
        let engine = Arc::clone(&self.engine);
        tokio::task::spawn_blocking(move || engine.run(&request))
            .await
            .map_err(|e| CompareError::Engine(e.to_string()))?
    }
}

fn base_config() -> DiffConfig {
    DiffConfig {
        threshold_type: ThresholdType::Percent,
        threshold: DiffConfig::DEFAULT_THRESHOLD,
        ..DiffConfig::default()
    }
}

fn delta(tolerance: Option<f64>) -> CompareResult<f64> {
    match tolerance {
        None => Ok(DiffConfig::DEFAULT_DELTA),
        Some(t) if t.is_finite() && t >= 0.0 => Ok(t),
        Some(t) => Err(CompareError::InvalidTolerance(t)),
    }
}

/// Check whether two screenshots match using the built-in engine.
///
/// See [`Comparator::compare`].
pub async fn compare(
    a: impl AsRef<Path>,
    b: impl AsRef<Path>,
    opts: CompareOptions,
) -> CompareResult<bool> {
    Comparator::new().compare(a, b, opts).await
}

/// Compare two screenshots and write a diff image using the built-in
/// engine.
///
/// See [`Comparator::build_diff`].
pub async fn build_diff(opts: DiffOptions) -> CompareResult<DiffResult> {
    Comparator::new().build_diff(opts).await
}
