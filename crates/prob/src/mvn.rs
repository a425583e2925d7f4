//! Multivariate-normal negative log-likelihood.

use std::f64::consts::PI;

use dynmath_linalg::{InversionConfig, invert_cholesky};
use ndarray::{ArrayView1, ArrayView2};

use crate::error::ProbError;

/// Negative log-density of a zero-mean multivariate normal.
///
/// ```text
/// k/2 · ln(2π) + ln(det)/2 + xᵀ · Σ⁻¹ · x / 2
/// ```
///
/// `inv_cov` is the precision matrix `Σ⁻¹` and `det` the determinant of
/// the covariance `Σ` (not of the precision). Callers subtract a non-zero
/// mean from `x` beforehand.
///
/// # Errors
///
/// - [`ProbError::DimensionMismatch`] when `inv_cov` is not `k×k`.
/// - [`ProbError::NonPositiveDeterminant`] when `det` is not finite and
///   positive. This includes the `0.0` reported by a sentinel-filled
///   Cholesky inversion.
///
/// # Example
///
/// ```
/// use dynmath_prob::neg_log_likelihood_mvn;
/// use ndarray::array;
///
/// let x = array![1.0, 0.0];
/// let precision = array![[1.0, 0.0], [0.0, 1.0]];
/// let nll = neg_log_likelihood_mvn(x.view(), precision.view(), 1.0).unwrap();
/// let expected = (2.0 * std::f64::consts::PI).ln() + 0.5;
/// assert!((nll - expected).abs() < 1e-12);
/// ```
pub fn neg_log_likelihood_mvn(
    x: ArrayView1<'_, f64>,
    inv_cov: ArrayView2<'_, f64>,
    det: f64,
) -> Result<f64, ProbError> {
    let k = x.len();
    if inv_cov.dim() != (k, k) {
        return Err(ProbError::DimensionMismatch {
            expected: (k, k),
            got: inv_cov.dim(),
        });
    }
    if !det.is_finite() || det <= 0.0 {
        return Err(ProbError::NonPositiveDeterminant { det });
    }

    let quad = x.dot(&inv_cov.dot(&x));
    Ok(k as f64 / 2.0 * (2.0 * PI).ln() + det.ln() / 2.0 + quad / 2.0)
}

/// Inverts `cov` by Cholesky and evaluates [`neg_log_likelihood_mvn`].
///
/// # Errors
///
/// Inversion failures are returned as [`ProbError::Linalg`]. Under the
/// sentinel policy a degenerate covariance surfaces as
/// [`ProbError::NonPositiveDeterminant`] instead.
pub fn neg_log_likelihood_mvn_cov(
    x: ArrayView1<'_, f64>,
    cov: ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<f64, ProbError> {
    let k = x.len();
    if cov.dim() != (k, k) {
        return Err(ProbError::DimensionMismatch {
            expected: (k, k),
            got: cov.dim(),
        });
    }
    let inv = invert_cholesky(cov, config)?;
    neg_log_likelihood_mvn(x, inv.inverse().view(), inv.det())
}
