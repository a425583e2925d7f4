//! Log-space normalisation.
//!
//! Turns a vector or matrix of unnormalised log-weights into probabilities
//! that sum to one, in place:
//!
//! 1. find `min` and `max` over the finite entries,
//! 2. subtract the midpoint `shift = (min + max) / 2`,
//! 3. exponentiate and accumulate `sum`,
//! 4. divide every entry by `sum`.
//!
//! The true log-normaliser is `ln(sum) + shift`, exposed as
//! [`LogNormalizer::log_total`].

use ndarray::{Array1, Array2, ArrayBase, DataMut, Dimension};
use tracing::trace;

use crate::error::ProbError;

/// Largest value an entry may reach after shifting.
///
/// Keeps `exp` and the running sum finite when `max - min` is very wide;
/// in that case the shift is raised above the midpoint.
const MAX_SHIFTED: f64 = 600.0;

/// Normalising constant returned by the log-space normalisers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalizer {
    sum: f64,
    shift: f64,
}

impl LogNormalizer {
    /// Sum of the shifted exponentials, `Σ exp(xᵢ - shift)`.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// The constant subtracted before exponentiating.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// `ln Σ exp(xᵢ)` of the original log-weights.
    pub fn log_total(&self) -> f64 {
        self.sum.ln() + self.shift
    }
}

/// Normalises log-weights of any dimension in place.
///
/// Entries equal to `-inf` are allowed and become `0.0`.
///
/// # Errors
///
/// Checked before anything is written; on error the input is unchanged.
///
/// - [`ProbError::EmptyInput`] for an empty array.
/// - [`ProbError::InvalidInput`] when an entry is NaN or `+inf`.
/// - [`ProbError::NoProbabilityMass`] when every entry is `-inf`.
pub fn normalize_log<S, D>(log_v: &mut ArrayBase<S, D>) -> Result<LogNormalizer, ProbError>
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    if log_v.is_empty() {
        return Err(ProbError::EmptyInput);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in log_v.iter() {
        if v.is_nan() {
            return Err(ProbError::InvalidInput {
                reason: "log-weights contain NaN",
            });
        }
        if v == f64::INFINITY {
            return Err(ProbError::InvalidInput {
                reason: "log-weights contain +inf",
            });
        }
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if max == f64::NEG_INFINITY {
        return Err(ProbError::NoProbabilityMass);
    }

    let shift = ((min + max) / 2.0).max(max - MAX_SHIFTED);
    trace!(min, max, shift, "normalising log-weights");

    let mut sum = 0.0;
    log_v.mapv_inplace(|v| {
        let e = (v - shift).exp();
        sum += e;
        e
    });
    log_v.mapv_inplace(|v| v / sum);

    Ok(LogNormalizer { sum, shift })
}

/// Normalises a vector of log-weights in place. See [`normalize_log`].
///
/// # Example
///
/// ```
/// use dynmath_prob::normalize_log_vector;
/// use ndarray::array;
///
/// let mut w = array![-1.0, -2.0];
/// let norm = normalize_log_vector(&mut w).unwrap();
/// let (a, b) = ((-1.0f64).exp(), (-2.0f64).exp());
/// assert!((w[0] - a / (a + b)).abs() < 1e-15);
/// assert!((norm.log_total() - (a + b).ln()).abs() < 1e-12);
/// ```
pub fn normalize_log_vector(log_v: &mut Array1<f64>) -> Result<LogNormalizer, ProbError> {
    normalize_log(log_v)
}

/// Normalises a matrix of log-weights in place, over all entries jointly.
/// See [`normalize_log`].
pub fn normalize_log_matrix(log_v: &mut Array2<f64>) -> Result<LogNormalizer, ProbError> {
    normalize_log(log_v)
}
