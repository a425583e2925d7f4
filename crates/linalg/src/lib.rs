//! # dynmath-linalg
//!
//! Dense linear-algebra primitives for the small parameter matrices of
//! state-space and mixture models: matrix inversion with a defined
//! degenerate-matrix policy, symmetric packing, and dense helpers.
//!
//! Factorisations are delegated to nalgebra; inputs and outputs are ndarray
//! containers.
//!
//! ## Inversion
//!
//! | Entry point | Factorisation | Use for |
//! |-------------|---------------|---------|
//! | [`invert_lu`] | LU with partial pivoting | general square matrices |
//! | [`invert_cholesky`] | Cholesky `L·Lᵀ` | symmetric positive-definite (covariances) |
//!
//! A matrix whose `|det|` is below [`InversionConfig::det_threshold`] is
//! degenerate. By default that is an error; [`SingularPolicy::Sentinel`]
//! instead fills the inverse with [`InversionConfig::sentinel`] (`10000.0`).
//!
//! ```
//! use dynmath_linalg::{InversionConfig, invert_cholesky};
//! use ndarray::array;
//!
//! let cov = array![[1.0, 2.0], [2.0, 4.0]];
//! let r = invert_cholesky(cov.view(), &InversionConfig::legacy()).unwrap();
//! assert!(r.is_degenerate());
//! assert_eq!(r.det(), 0.0);
//! assert!(r.inverse().iter().all(|&v| v == 10000.0));
//! ```
//!
//! ## Symmetric packing
//!
//! [`pack`] / [`unpack`] map an `n×n` symmetric matrix to its `n(n+1)/2`
//! unique entries (diagonal first) and back.

pub mod config;
pub mod dense;
pub mod error;
pub mod inverse;
pub mod pack;

pub(crate) mod bridge;
pub(crate) mod shape;

pub use config::{DEFAULT_DET_THRESHOLD, DEFAULT_SENTINEL, InversionConfig, SingularPolicy};
pub use dense::{
    diag_from_vector_scaled, diag_to_vector_scaled, matrix_multiply, matrix_multiply_into, min3,
    normalize_to_sum_one, normalize_to_sum_one_matrix, normalize_to_sum_one_vector, scale_matrix,
    scale_vector, sum_vector, trace,
};
pub use error::LinalgError;
pub use inverse::{
    Inversion, cholesky_det, invert, invert_cholesky, invert_cholesky_into, invert_lu,
    invert_lu_into, is_invertible, lu_det,
};
pub use pack::{pack, pack_into, packed_dim, packed_index, packed_len, unpack, unpack_into};
