//! Logistic and softmax link transforms.

use ndarray::{Array1, ArrayView1};

use crate::error::ProbError;

/// Inverse logit, `1 / (1 + e^{-x})`.
///
/// Saturates to `0.0` / `1.0` for large `|x|` without producing NaN.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `ln Σ exp(xᵢ)`, computed relative to the maximum.
///
/// Returns `-inf` for an empty input or when every entry is `-inf`, and
/// `+inf` when any entry is `+inf`.
pub fn log_sum_exp(x: ArrayView1<'_, f64>) -> f64 {
    let max = x.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    if max.is_infinite() {
        return max;
    }
    max + x.fold(0.0, |acc, &v| acc + (v - max).exp()).ln()
}

/// Maps `x` to a probability vector, `exp(xᵢ) / Σ exp(xⱼ)`.
///
/// The maximum is subtracted before exponentiating, so large inputs do not
/// overflow. Entries of `-inf` map to `0.0`.
///
/// # Errors
///
/// - [`ProbError::EmptyInput`] for an empty vector.
/// - [`ProbError::InvalidInput`] when any entry is NaN or `+inf`, or every
///   entry is `-inf`.
///
/// # Example
///
/// ```
/// use dynmath_prob::softmax;
/// use ndarray::array;
///
/// let p = softmax(array![1000.0, 1000.0].view()).unwrap();
/// assert_eq!(p.to_vec(), vec![0.5, 0.5]);
/// ```
pub fn softmax(x: ArrayView1<'_, f64>) -> Result<Array1<f64>, ProbError> {
    if x.is_empty() {
        return Err(ProbError::EmptyInput);
    }
    if x.iter().any(|v| v.is_nan() || *v == f64::INFINITY) {
        return Err(ProbError::InvalidInput {
            reason: "softmax input contains NaN or +inf",
        });
    }
    let max = x.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    if max == f64::NEG_INFINITY {
        return Err(ProbError::InvalidInput {
            reason: "softmax input is entirely -inf",
        });
    }

    let mut out = x.mapv(|v| (v - max).exp());
    let scale = out.sum();
    out.mapv_inplace(|v| v / scale);
    Ok(out)
}
