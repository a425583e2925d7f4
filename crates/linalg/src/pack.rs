//! Symmetric matrix packing.
//!
//! An `n×n` symmetric matrix has `n(n+1)/2` unique entries. The packed
//! layout stores the diagonal first, then the strict upper triangle in
//! row-major order:
//!
//! ```text
//! [ a d e ]
//! [ d b f ]   ->   [a, b, c, d, e, f]
//! [ e f c ]
//! ```
//!
//! For `n <= 3` the offset of `(i, j)`, `i < j`, equals `i + j + n - 1`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::LinalgError;
use crate::shape::ensure_square;

/// Length of the packed representation of an `n×n` symmetric matrix.
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Matrix dimension for a packed vector of length `len`.
///
/// Returns `None` when `len` is not a triangular number.
pub fn packed_dim(len: usize) -> Option<usize> {
    let n = ((((8 * len + 1) as f64).sqrt() - 1.0) / 2.0).round() as usize;
    (packed_len(n) == len).then_some(n)
}

/// Packed index of the off-diagonal entry `(i, j)` with `i < j < n`.
#[inline]
pub fn packed_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n);
    // Skip the diagonal block, then the rows of the upper triangle above i.
    n + i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// Packs the diagonal and upper triangle of a symmetric matrix.
///
/// The lower triangle is not read.
///
/// # Errors
///
/// [`LinalgError::NotSquare`] or [`LinalgError::EmptyMatrix`].
///
/// # Example
///
/// ```
/// use dynmath_linalg::pack;
/// use ndarray::array;
///
/// let v = pack(array![[9.0, 1.0], [1.0, 4.0]].view()).unwrap();
/// assert_eq!(v.to_vec(), vec![9.0, 4.0, 1.0]);
/// ```
pub fn pack(mat: ArrayView2<'_, f64>) -> Result<Array1<f64>, LinalgError> {
    let n = ensure_square(mat.dim())?;
    let mut out = Array1::zeros(packed_len(n));
    write_packed(&mat, &mut out, n);
    Ok(out)
}

/// Like [`pack`], writing into a caller buffer of length `n(n+1)/2`.
pub fn pack_into(mat: ArrayView2<'_, f64>, out: &mut Array1<f64>) -> Result<(), LinalgError> {
    let n = ensure_square(mat.dim())?;
    if out.len() != packed_len(n) {
        return Err(LinalgError::PackedLengthMismatch {
            expected: packed_len(n),
            got: out.len(),
        });
    }
    write_packed(&mat, out, n);
    Ok(())
}

fn write_packed(mat: &ArrayView2<'_, f64>, out: &mut Array1<f64>, n: usize) {
    for i in 0..n {
        out[i] = mat[[i, i]];
        for j in (i + 1)..n {
            out[packed_index(i, j, n)] = mat[[i, j]];
        }
    }
}

/// Rebuilds the symmetric matrix from its packed representation.
///
/// # Errors
///
/// [`LinalgError::PackedLengthMismatch`] when `vec.len()` is not
/// triangular (`expected` is then the next triangular length), or
/// [`LinalgError::EmptyMatrix`] for an empty vector.
pub fn unpack(vec: ArrayView1<'_, f64>) -> Result<Array2<f64>, LinalgError> {
    let n = match packed_dim(vec.len()) {
        Some(0) => return Err(LinalgError::EmptyMatrix),
        Some(n) => n,
        None => {
            let mut n = 1;
            while packed_len(n) < vec.len() {
                n += 1;
            }
            return Err(LinalgError::PackedLengthMismatch {
                expected: packed_len(n),
                got: vec.len(),
            });
        }
    };
    let mut out = Array2::zeros((n, n));
    write_unpacked(&vec, &mut out, n);
    Ok(out)
}

/// Like [`unpack`], writing into an existing `n×n` matrix.
///
/// The dimension is taken from `out`; `vec` must have length `n(n+1)/2`.
pub fn unpack_into(vec: ArrayView1<'_, f64>, out: &mut Array2<f64>) -> Result<(), LinalgError> {
    let n = ensure_square(out.dim())?;
    if vec.len() != packed_len(n) {
        return Err(LinalgError::PackedLengthMismatch {
            expected: packed_len(n),
            got: vec.len(),
        });
    }
    write_unpacked(&vec, out, n);
    Ok(())
}

fn write_unpacked(vec: &ArrayView1<'_, f64>, out: &mut Array2<f64>, n: usize) {
    for i in 0..n {
        out[[i, i]] = vec[i];
        for j in (i + 1)..n {
            let v = vec[packed_index(i, j, n)];
            out[[i, j]] = v;
            out[[j, i]] = v;
        }
    }
}
