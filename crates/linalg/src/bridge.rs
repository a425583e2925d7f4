//! Copies between ndarray containers and nalgebra scratch matrices.
//!
//! nalgebra is the factorisation backend; every call copies its input into
//! a fresh `DMatrix` and copies the result back out, so caller buffers are
//! never factorised in place.

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

/// Copies an ndarray matrix into a new column-major `DMatrix`.
pub(crate) fn to_dmatrix(mat: &ArrayView2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[[i, j]])
}

/// Copies a `DMatrix` into a pre-shaped ndarray buffer.
///
/// The traversal is column by column to follow `DMatrix` storage.
/// Shapes are checked by the caller.
pub(crate) fn fill_array(src: &DMatrix<f64>, dst: &mut Array2<f64>) {
    debug_assert_eq!(src.shape(), dst.dim());
    for j in 0..src.ncols() {
        for i in 0..src.nrows() {
            dst[[i, j]] = src[(i, j)];
        }
    }
}
