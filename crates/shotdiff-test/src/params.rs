//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use shotdiff_core::{Pix, Rgba};
use std::fs;
use std::path::PathBuf;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check results and remove written artifacts (default)
    #[default]
    Compare,
    /// Check results and keep artifacts for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, a running index used to name artifacts, the
/// mode, and every failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "crop")
    pub test_name: String,
    /// Current test index (incremented before each check or write)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
    /// Artifacts written through this instance
    written: Vec<PathBuf>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Creates the regout directory and installs the test logger.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();
        let _ = fs::create_dir_all(regout_dir());
        log::debug!("{}_reg: mode {:?}", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            return self.fail(msg);
        }
        true
    }

    /// Compare two colors for exact equality
    pub fn compare_rgba(&mut self, expected: Rgba, actual: Rgba) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: color comparison for index {} - expected {}, got {}",
                self.test_name, self.index, expected, actual
            );
            return self.fail(msg);
        }
        true
    }

    /// Compare two images for exact pixel equality
    ///
    /// Samples-per-pixel is ignored; only extent and pixel values count.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - size mismatch {}x{} vs {}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            return self.fail(msg);
        }

        let mismatch = pix1
            .data()
            .iter()
            .zip(pix2.data())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let w = pix1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % w,
                i / w
            );
            return self.fail(msg);
        }
        true
    }

    /// Path for the next artifact, advancing the index
    pub fn next_path(&mut self, ext: &str) -> PathBuf {
        self.index += 1;
        let path = regout_dir().join(format!("{}.{:02}.{}", self.test_name, self.index, ext));
        self.written.push(path.clone());
        path
    }

    /// Write a Pix to the regout directory as PNG
    ///
    /// Returns the written path so it can be fed to file-based APIs.
    pub fn write_pix(&mut self, pix: &Pix) -> TestResult<PathBuf> {
        let path = self.next_path("png");
        shotdiff_io::write_image(pix, &path).map_err(|e| TestError::ImageWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    /// Clean up and report results
    ///
    /// Removes written artifacts unless in display mode. Returns `true`
    /// if every check passed.
    pub fn cleanup(self) -> bool {
        if self.mode == RegTestMode::Compare {
            for path in &self.written {
                let _ = fs::remove_file(path);
            }
        }

        if self.success {
            log::debug!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_records_failure() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix_reports_position() {
        let mut rp = RegParams::new("params_pix");
        let a = Pix::new(3, 3).unwrap();
        let mut b = a.clone();
        b.set_pixel(2, 1, 7).unwrap();
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));
    }

    #[test]
    fn test_write_pix_then_cleanup_removes() {
        let mut rp = RegParams::new("params_write");
        let mut pix = Pix::new(2, 2).unwrap();
        pix.set_all(Rgba::WHITE);
        let path = rp.write_pix(&pix).unwrap();
        assert!(path.exists());
        let mode = rp.mode;
        assert!(rp.cleanup());
        if mode == RegTestMode::Compare {
            assert!(!path.exists());
        }
    }
}
