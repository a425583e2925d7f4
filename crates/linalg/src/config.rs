//! Configuration for matrix inversion.

use crate::error::LinalgError;

/// Default `|det|` threshold below which a matrix is treated as singular.
pub const DEFAULT_DET_THRESHOLD: f64 = 1e-6;

/// Default fill value written into the inverse on the legacy sentinel path.
pub const DEFAULT_SENTINEL: f64 = 10000.0;

/// What to do when a matrix is singular or not positive definite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SingularPolicy {
    /// Return [`LinalgError::SingularMatrix`] or
    /// [`LinalgError::NotPositiveDefinite`].
    #[default]
    Error,
    /// Fill the inverse with the sentinel value and report the determinant.
    ///
    /// The LU path reports the tiny determinant unchanged, the Cholesky path
    /// reports `0.0`.
    Sentinel,
}

/// Configuration for the inversion entry points.
///
/// # Example
///
/// ```
/// use dynmath_linalg::{InversionConfig, SingularPolicy};
///
/// let config = InversionConfig::new()
///     .with_det_threshold(1e-9)
///     .with_on_singular(SingularPolicy::Sentinel);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InversionConfig {
    /// `|det|` strictly below this is degenerate.
    det_threshold: f64,
    /// Fill value for the sentinel path.
    sentinel: f64,
    /// Degenerate-matrix handling.
    on_singular: SingularPolicy,
}

impl InversionConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: `det_threshold = 1e-6`, `sentinel = 10000.0`,
    /// `on_singular = Error`.
    pub fn new() -> Self {
        Self {
            det_threshold: DEFAULT_DET_THRESHOLD,
            sentinel: DEFAULT_SENTINEL,
            on_singular: SingularPolicy::Error,
        }
    }

    /// Creates the configuration that reproduces the sentinel-filling
    /// behaviour with default threshold and sentinel.
    pub fn legacy() -> Self {
        Self::new().with_on_singular(SingularPolicy::Sentinel)
    }

    /// Sets the determinant threshold.
    pub fn with_det_threshold(mut self, det_threshold: f64) -> Self {
        self.det_threshold = det_threshold;
        self
    }

    /// Sets the sentinel fill value.
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Sets the degenerate-matrix policy.
    pub fn with_on_singular(mut self, on_singular: SingularPolicy) -> Self {
        self.on_singular = on_singular;
        self
    }

    /// Returns the determinant threshold.
    pub fn det_threshold(&self) -> f64 {
        self.det_threshold
    }

    /// Returns the sentinel fill value.
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Returns the degenerate-matrix policy.
    pub fn on_singular(&self) -> SingularPolicy {
        self.on_singular
    }

    /// Returns `true` if `det` is below the threshold.
    pub(crate) fn is_degenerate(&self, det: f64) -> bool {
        det.is_nan() || det.abs() < self.det_threshold
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), LinalgError> {
        if !self.det_threshold.is_finite() || self.det_threshold < 0.0 {
            return Err(LinalgError::InvalidThreshold {
                value: self.det_threshold,
            });
        }
        if !self.sentinel.is_finite() {
            return Err(LinalgError::InvalidSentinel {
                value: self.sentinel,
            });
        }
        Ok(())
    }
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self::new()
    }
}
