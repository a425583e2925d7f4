//! Error types for the dynmath-sampling crate.

/// Error type for all fallible operations in the dynmath-sampling crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    /// Returned when a standard deviation is negative or non-finite.
    #[error("sigma must be finite and non-negative, got {sigma}")]
    InvalidSigma {
        /// The invalid standard deviation.
        sigma: f64,
    },

    /// Returned when an entry of a standard-deviation vector is invalid.
    #[error("sigma[{index}] must be finite and non-negative, got {sigma}")]
    InvalidSigmaEntry {
        /// Position of the invalid entry.
        index: usize,
        /// The invalid standard deviation.
        sigma: f64,
    },

    /// Returned when a mean is non-finite.
    #[error("mean must be finite, got {mu}")]
    InvalidMean {
        /// The invalid mean.
        mu: f64,
    },

    /// Returned when an output buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },
}
