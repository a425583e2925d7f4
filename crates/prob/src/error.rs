//! Error types for the dynmath-prob crate.

use dynmath_linalg::LinalgError;

/// Error type for all fallible operations in the dynmath-prob crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbError {
    /// Returned when an input array has no elements.
    #[error("input is empty")]
    EmptyInput,

    /// Returned when an array does not have the shape implied by another input.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Required `(rows, cols)`.
        expected: (usize, usize),
        /// Shape that was supplied.
        got: (usize, usize),
    },

    /// Returned when a covariance determinant is zero, negative or non-finite.
    #[error("covariance determinant must be finite and positive, got {det}")]
    NonPositiveDeterminant {
        /// The offending determinant.
        det: f64,
    },

    /// Returned when an input contains values the operation cannot accept.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// Returned when every log-weight is negative infinity.
    #[error("all log-weights are -inf, no probability mass to normalise")]
    NoProbabilityMass,

    /// Propagated from a linear-algebra step.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
