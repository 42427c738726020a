//! shotdiff-test - Regression test support for shotdiff
//!
//! Provides fixture builders for synthetic screenshots, an output
//! directory for artifacts written during tests, and [`RegParams`], a
//! small checker that records every failed comparison and reports them
//! together.
//!
//! # Usage
//!
//! ```ignore
//! use shotdiff_test::{RegParams, solid};
//!
//! let mut rp = RegParams::new("crop");
//! let path = rp.write_pix(&solid(10, 10, Rgba::WHITE))?;
//! rp.compare_values(10.0, width as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `display` keeps written artifacts for inspection,
//!   anything else (the default) removes them on cleanup
//! - `RUST_LOG`: log filter for [`init_logging`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use shotdiff_core::{Pix, Rect, Rgba};
use std::path::PathBuf;

/// Install an `env_logger` logger for tests.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> PathBuf {
    // shotdiff-test is at crates/shotdiff-test, so go up two directories
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}

/// Load an image written earlier in a test run
pub fn load_image(path: &std::path::Path) -> TestResult<Pix> {
    shotdiff_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Create an image filled with one color
pub fn solid(w: u32, h: u32, color: Rgba) -> Pix {
    let mut pix = Pix::new(w, h).unwrap();
    pix.set_all(color);
    pix
}

/// Create an opaque image whose pixels encode their own coordinates
///
/// Red is `x`, green is `y`, blue is `x ^ y` (all modulo 256), so any
/// misplaced pixel is detectable after cropping or stitching.
pub fn coordinate_image(w: u32, h: u32) -> Pix {
    let data = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .map(|(x, y)| Rgba::rgb(x as u8, y as u8, (x ^ y) as u8).to_pixel())
        .collect();
    Pix::from_raw(w, h, 3, data).unwrap()
}

/// Copy of `base` with a solid rectangle painted over it
pub fn with_patch(base: &Pix, rect: Rect, color: Rgba) -> Pix {
    let mut pix = base.clone();
    pix.fill_rect(rect, color);
    pix
}
