//! Dense arithmetic helpers.

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, DataMut, Dimension};

use crate::error::LinalgError;
use crate::shape::ensure_shape;

/// Shape of `op(A)·op(B)` after checking the inner dimensions.
fn product_shape(
    a: &ArrayView2<'_, f64>,
    b: &ArrayView2<'_, f64>,
) -> Result<(usize, usize), LinalgError> {
    let (rows, left) = a.dim();
    let (right, cols) = b.dim();
    if left != right {
        return Err(LinalgError::InnerDimensionMismatch { left, right });
    }
    Ok((rows, cols))
}

fn oriented<'a>(m: ArrayView2<'a, f64>, transpose: bool) -> ArrayView2<'a, f64> {
    if transpose { m.reversed_axes() } else { m }
}

/// Computes `C = op(A)·op(B)`, where `op` transposes when the flag is set.
///
/// Accumulates directly with a triple loop; intended for the small
/// parameter matrices of state-space models.
///
/// # Errors
///
/// [`LinalgError::InnerDimensionMismatch`] when the inner dimensions of the
/// oriented operands disagree.
///
/// # Example
///
/// ```
/// use dynmath_linalg::matrix_multiply;
/// use ndarray::array;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let c = matrix_multiply(a.view(), a.view(), true, false).unwrap();
/// assert_eq!(c, array![[10.0, 14.0], [14.0, 20.0]]);
/// ```
pub fn matrix_multiply(
    a: ArrayView2<'_, f64>,
    b: ArrayView2<'_, f64>,
    transpose_a: bool,
    transpose_b: bool,
) -> Result<Array2<f64>, LinalgError> {
    let a = oriented(a, transpose_a);
    let b = oriented(b, transpose_b);
    let mut c = Array2::zeros(product_shape(&a, &b)?);
    accumulate(&a, &b, &mut c);
    Ok(c)
}

/// Like [`matrix_multiply`], writing into a pre-shaped buffer.
///
/// # Errors
///
/// As [`matrix_multiply`], plus [`LinalgError::ShapeMismatch`] when `c`
/// does not have the shape of the product.
pub fn matrix_multiply_into(
    a: ArrayView2<'_, f64>,
    b: ArrayView2<'_, f64>,
    transpose_a: bool,
    transpose_b: bool,
    c: &mut Array2<f64>,
) -> Result<(), LinalgError> {
    let a = oriented(a, transpose_a);
    let b = oriented(b, transpose_b);
    ensure_shape(product_shape(&a, &b)?, c.dim())?;
    accumulate(&a, &b, c);
    Ok(())
}

fn accumulate(a: &ArrayView2<'_, f64>, b: &ArrayView2<'_, f64>, c: &mut Array2<f64>) {
    let inner = a.ncols();
    for ((r, col), out) in c.indexed_iter_mut() {
        let mut v = 0.0;
        for k in 0..inner {
            v += a[[r, k]] * b[[k, col]];
        }
        *out = v;
    }
}

/// Returns `v·x`.
pub fn scale_vector(v: ArrayView1<'_, f64>, x: f64) -> Array1<f64> {
    v.mapv(|e| e * x)
}

/// Returns `M·x`.
pub fn scale_matrix(m: ArrayView2<'_, f64>, x: f64) -> Array2<f64> {
    m.mapv(|e| e * x)
}

/// Builds an `n×n` matrix whose diagonal is `v·x` and whose other entries
/// are zero.
pub fn diag_from_vector_scaled(v: ArrayView1<'_, f64>, x: f64) -> Array2<f64> {
    Array2::from_diag(&v.mapv(|e| e * x))
}

/// Returns `diag(M)·x` for a square matrix.
///
/// # Errors
///
/// [`LinalgError::NotSquare`].
pub fn diag_to_vector_scaled(
    m: ArrayView2<'_, f64>,
    x: f64,
) -> Result<Array1<f64>, LinalgError> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(m.diag().mapv(|e| e * x))
}

/// Sum of the diagonal. The trace of a `0×0` matrix is `0.0`.
///
/// # Errors
///
/// [`LinalgError::NotSquare`].
pub fn trace(m: ArrayView2<'_, f64>) -> Result<f64, LinalgError> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(m.diag().sum())
}

/// Sum of all elements.
pub fn sum_vector(v: ArrayView1<'_, f64>) -> f64 {
    v.sum()
}

/// Divides every element by the total so the array sums to one.
///
/// Works for vectors and matrices alike. No log-space handling is done;
/// entries are expected to be non-negative. Returns the original total.
///
/// # Errors
///
/// [`LinalgError::ZeroSum`] when the total is zero or non-finite; the array
/// is left unchanged.
pub fn normalize_to_sum_one<S, D>(a: &mut ArrayBase<S, D>) -> Result<f64, LinalgError>
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    let sum = a.sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(LinalgError::ZeroSum { sum });
    }
    a.mapv_inplace(|e| e / sum);
    Ok(sum)
}

/// Vector form of [`normalize_to_sum_one`].
pub fn normalize_to_sum_one_vector(v: &mut Array1<f64>) -> Result<f64, LinalgError> {
    normalize_to_sum_one(v)
}

/// Matrix form of [`normalize_to_sum_one`]; all entries are normalised jointly.
pub fn normalize_to_sum_one_matrix(m: &mut Array2<f64>) -> Result<f64, LinalgError> {
    normalize_to_sum_one(m)
}

/// Smallest of three values, comparing with `<`.
pub fn min3(x: f64, y: f64, z: f64) -> f64 {
    if x < y {
        if x < z { x } else { z }
    } else if y < z {
        y
    } else {
        z
    }
}
