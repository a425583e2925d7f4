//! Error types for the dynmath-linalg crate.

/// Error type for all fallible operations in the dynmath-linalg crate.
///
/// Shape problems are caller-contract violations and are reported before
/// any computation starts. Degenerate matrices are only reported as errors
/// under [`SingularPolicy::Error`](crate::SingularPolicy::Error); the legacy
/// sentinel policy never produces [`LinalgError::SingularMatrix`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// Returned when a matrix with zero rows or columns is passed where a
    /// non-empty one is required.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Returned when an operation requiring a square matrix gets a
    /// rectangular one.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when an output buffer does not have the required shape.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Required `(rows, cols)`.
        expected: (usize, usize),
        /// Shape that was supplied.
        got: (usize, usize),
    },

    /// Returned when the inner dimensions of a matrix product disagree.
    #[error("inner dimensions do not agree: left has {left}, right has {right}")]
    InnerDimensionMismatch {
        /// Inner dimension of the (possibly transposed) left operand.
        left: usize,
        /// Inner dimension of the (possibly transposed) right operand.
        right: usize,
    },

    /// Returned when a packed symmetric vector has the wrong length.
    #[error("packed vector length {got} does not match expected {expected}")]
    PackedLengthMismatch {
        /// Required length `n(n+1)/2`.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// Returned when `|det|` falls below the configured threshold.
    #[error("matrix is singular (det = {det:e})")]
    SingularMatrix {
        /// The determinant that triggered the failure.
        det: f64,
    },

    /// Returned when a Cholesky factorisation fails.
    #[error("matrix is not positive definite")]
    NotPositiveDefinite,

    /// Returned when a sum-to-one normalisation has a zero or non-finite total.
    #[error("cannot normalise: sum is {sum}")]
    ZeroSum {
        /// The offending total.
        sum: f64,
    },

    /// Returned when the determinant threshold is negative or non-finite.
    #[error("determinant threshold must be finite and non-negative, got {value}")]
    InvalidThreshold {
        /// The invalid threshold.
        value: f64,
    },

    /// Returned when the sentinel fill value is non-finite.
    #[error("sentinel must be finite, got {value}")]
    InvalidSentinel {
        /// The invalid sentinel.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_matrix() {
        assert_eq!(LinalgError::EmptyMatrix.to_string(), "matrix is empty");
    }

    #[test]
    fn error_not_square() {
        let e = LinalgError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix is not square: 2x3");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = LinalgError::ShapeMismatch {
            expected: (3, 3),
            got: (2, 2),
        };
        assert_eq!(e.to_string(), "shape mismatch: expected (3, 3), got (2, 2)");
    }

    #[test]
    fn error_inner_dimension_mismatch() {
        let e = LinalgError::InnerDimensionMismatch { left: 4, right: 2 };
        assert_eq!(
            e.to_string(),
            "inner dimensions do not agree: left has 4, right has 2"
        );
    }

    #[test]
    fn error_packed_length_mismatch() {
        let e = LinalgError::PackedLengthMismatch {
            expected: 6,
            got: 5,
        };
        assert_eq!(
            e.to_string(),
            "packed vector length 5 does not match expected 6"
        );
    }

    #[test]
    fn error_singular_matrix() {
        let e = LinalgError::SingularMatrix { det: 0.0 };
        assert_eq!(e.to_string(), "matrix is singular (det = 0e0)");
    }

    #[test]
    fn error_not_positive_definite() {
        assert_eq!(
            LinalgError::NotPositiveDefinite.to_string(),
            "matrix is not positive definite"
        );
    }

    #[test]
    fn error_zero_sum() {
        let e = LinalgError::ZeroSum { sum: 0.0 };
        assert_eq!(e.to_string(), "cannot normalise: sum is 0");
    }

    #[test]
    fn error_invalid_config_values() {
        let e = LinalgError::InvalidThreshold { value: -1.0 };
        assert_eq!(
            e.to_string(),
            "determinant threshold must be finite and non-negative, got -1"
        );
        let e = LinalgError::InvalidSentinel { value: f64::NAN };
        assert_eq!(e.to_string(), "sentinel must be finite, got NaN");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LinalgError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LinalgError>();
    }
}
