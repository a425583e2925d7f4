//! # dynmath-prob
//!
//! Probability utilities used inside estimation loops:
//!
//! | Function | Computes |
//! |----------|----------|
//! | [`neg_log_likelihood_mvn`] | `-ln N(x; 0, Σ)` from a precision matrix and `det Σ` |
//! | [`neg_log_likelihood_mvn_cov`] | the same, inverting `Σ` by Cholesky first |
//! | [`logistic`] | `1 / (1 + e^{-x})` |
//! | [`softmax`] | `exp(xᵢ) / Σ exp(xⱼ)`, max-stabilised |
//! | [`log_sum_exp`] | `ln Σ exp(xᵢ)` |
//! | [`normalize_log_vector`] / [`normalize_log_matrix`] | log-weights to probabilities, in place |
//!
//! Determinants from a sentinel-filled inversion (`0.0`) are rejected by
//! the likelihood rather than producing `-inf`/NaN.

pub mod error;
pub mod mvn;
pub mod normalize;
pub mod transform;

pub use error::ProbError;
pub use mvn::{neg_log_likelihood_mvn, neg_log_likelihood_mvn_cov};
pub use normalize::{LogNormalizer, normalize_log, normalize_log_matrix, normalize_log_vector};
pub use transform::{log_sum_exp, logistic, softmax};
