//! LU- and Cholesky-based matrix inversion with a degenerate-matrix policy.
//!
//! Both entry points copy the input into a scratch matrix, factorise it with
//! nalgebra, compute the determinant from the factor, and only invert when
//! `|det|` clears [`InversionConfig::det_threshold`]. What happens otherwise
//! is decided by [`SingularPolicy`]:
//!
//! | Path | `Error` policy | `Sentinel` policy |
//! |------|----------------|-------------------|
//! | LU, `|det|` small | `SingularMatrix { det }` | sentinel fill, `det` unchanged |
//! | Cholesky, not PD | `NotPositiveDefinite` | sentinel fill, `det = 0.0` |
//! | Cholesky, `|det|` small | `SingularMatrix { det }` | sentinel fill, `det = 0.0` |

use nalgebra::{Cholesky, DMatrix};
use ndarray::{Array2, ArrayView2};
use tracing::{debug, warn};

use crate::bridge::{fill_array, to_dmatrix};
use crate::config::{InversionConfig, SingularPolicy};
use crate::error::LinalgError;
use crate::shape::{ensure_shape, ensure_square};

/// An inverse together with the determinant of the original matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Inversion {
    inverse: Array2<f64>,
    det: f64,
    degenerate: bool,
}

impl Inversion {
    /// The inverse, or a sentinel-filled matrix when [`is_degenerate`](Self::is_degenerate).
    pub fn inverse(&self) -> &Array2<f64> {
        &self.inverse
    }

    /// Determinant of the original matrix (see the module table for the
    /// degenerate cases).
    pub fn det(&self) -> f64 {
        self.det
    }

    /// `true` when the sentinel policy replaced the inverse.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Consumes the result, returning `(inverse, det)`.
    pub fn into_parts(self) -> (Array2<f64>, f64) {
        (self.inverse, self.det)
    }
}

/// Outcome of factorising the scratch copy.
enum Factored {
    Inverted(DMatrix<f64>),
    Degenerate,
}

/// Computes the determinant of `mat` from its LU factorisation.
///
/// # Errors
///
/// [`LinalgError::NotSquare`] or [`LinalgError::EmptyMatrix`].
pub fn lu_det(mat: ArrayView2<'_, f64>) -> Result<f64, LinalgError> {
    ensure_square(mat.dim())?;
    Ok(to_dmatrix(&mat).lu().determinant())
}

/// Returns `true` if the LU determinant of `mat` clears the threshold.
pub fn is_invertible(
    mat: ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<bool, LinalgError> {
    config.validate()?;
    let det = lu_det(mat)?;
    Ok(!config.is_degenerate(det))
}

fn lu_factor(
    mat: &ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<(Factored, f64), LinalgError> {
    config.validate()?;
    let n = ensure_square(mat.dim())?;

    let lu = to_dmatrix(mat).lu();
    let det = lu.determinant();

    if config.is_degenerate(det) {
        debug!(n, det, "LU determinant below threshold");
        return match config.on_singular() {
            SingularPolicy::Error => Err(LinalgError::SingularMatrix { det }),
            SingularPolicy::Sentinel => Ok((Factored::Degenerate, det)),
        };
    }

    match lu.try_inverse() {
        Some(inv) => Ok((Factored::Inverted(inv), det)),
        None => match config.on_singular() {
            SingularPolicy::Error => Err(LinalgError::SingularMatrix { det }),
            SingularPolicy::Sentinel => Ok((Factored::Degenerate, det)),
        },
    }
}

fn cholesky_factor(
    mat: &ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<(Factored, f64), LinalgError> {
    config.validate()?;
    let n = ensure_square(mat.dim())?;

    let Some(chol) = Cholesky::new(to_dmatrix(mat)) else {
        debug!(n, "Cholesky factorisation failed");
        return match config.on_singular() {
            SingularPolicy::Error => Err(LinalgError::NotPositiveDefinite),
            SingularPolicy::Sentinel => Ok((Factored::Degenerate, 0.0)),
        };
    };

    let diag_product: f64 = chol.l_dirty().diagonal().iter().product();
    let det = diag_product * diag_product;

    if config.is_degenerate(det) {
        debug!(n, det, "Cholesky determinant below threshold");
        return match config.on_singular() {
            SingularPolicy::Error => Err(LinalgError::SingularMatrix { det }),
            SingularPolicy::Sentinel => Ok((Factored::Degenerate, 0.0)),
        };
    }

    Ok((Factored::Inverted(chol.inverse()), det))
}

/// Writes the factorisation outcome into `out`.
fn write_outcome(
    factored: Factored,
    out: &mut Array2<f64>,
    config: &InversionConfig,
) -> bool {
    match factored {
        Factored::Inverted(inv) => {
            fill_array(&inv, out);
            false
        }
        Factored::Degenerate => {
            warn!(
                sentinel = config.sentinel(),
                "degenerate matrix, filling inverse with sentinel"
            );
            out.fill(config.sentinel());
            true
        }
    }
}

/// Inverts a general square matrix via LU decomposition.
///
/// The input is copied; `mat` is never modified. The reported determinant
/// is the LU determinant including the permutation sign.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] / [`LinalgError::EmptyMatrix`] for bad shapes.
/// - [`LinalgError::SingularMatrix`] when `|det|` is below the threshold and
///   the policy is [`SingularPolicy::Error`].
///
/// # Example
///
/// ```
/// use dynmath_linalg::{InversionConfig, invert_lu};
/// use ndarray::array;
///
/// let m = array![[2.0, 1.0], [1.0, 3.0]];
/// let inv = invert_lu(m.view(), &InversionConfig::default()).unwrap();
/// assert!((inv.det() - 5.0).abs() < 1e-12);
/// ```
#[tracing::instrument(skip_all, fields(n = mat.nrows()))]
pub fn invert_lu(
    mat: ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<Inversion, LinalgError> {
    let (factored, det) = lu_factor(&mat, config)?;
    let mut inverse = Array2::zeros(mat.dim());
    let degenerate = write_outcome(factored, &mut inverse, config);
    Ok(Inversion {
        inverse,
        det,
        degenerate,
    })
}

/// Like [`invert_lu`], writing the inverse into a caller buffer.
///
/// Returns the determinant. On an error `inv` is left untouched.
///
/// # Errors
///
/// As [`invert_lu`], plus [`LinalgError::ShapeMismatch`] when `inv` does not
/// have the shape of `mat`.
#[tracing::instrument(skip_all, fields(n = mat.nrows()))]
pub fn invert_lu_into(
    mat: ArrayView2<'_, f64>,
    inv: &mut Array2<f64>,
    config: &InversionConfig,
) -> Result<f64, LinalgError> {
    ensure_square(mat.dim())?;
    ensure_shape(mat.dim(), inv.dim())?;
    let (factored, det) = lu_factor(&mat, config)?;
    write_outcome(factored, inv, config);
    Ok(det)
}

/// Inverts a square matrix via LU decomposition, discarding the determinant.
pub fn invert(
    mat: ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<Array2<f64>, LinalgError> {
    invert_lu(mat, config).map(|r| r.inverse)
}

/// Inverts a symmetric positive-definite matrix via Cholesky decomposition.
///
/// Only the lower triangle of `mat` is read by the factorisation.
/// The determinant is the squared product of the factor's diagonal.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] / [`LinalgError::EmptyMatrix`] for bad shapes.
/// - [`LinalgError::NotPositiveDefinite`] when factorisation fails and
///   [`LinalgError::SingularMatrix`] when `|det|` is below the threshold,
///   both under [`SingularPolicy::Error`].
///
/// # Example
///
/// ```
/// use dynmath_linalg::{InversionConfig, invert_cholesky};
/// use ndarray::array;
///
/// let cov = array![[4.0, 2.0], [2.0, 3.0]];
/// let inv = invert_cholesky(cov.view(), &InversionConfig::default()).unwrap();
/// assert!((inv.det() - 8.0).abs() < 1e-12);
/// assert!((inv.inverse()[[0, 0]] - 0.375).abs() < 1e-12);
/// ```
#[tracing::instrument(skip_all, fields(n = mat.nrows()))]
pub fn invert_cholesky(
    mat: ArrayView2<'_, f64>,
    config: &InversionConfig,
) -> Result<Inversion, LinalgError> {
    let (factored, det) = cholesky_factor(&mat, config)?;
    let mut inverse = Array2::zeros(mat.dim());
    let degenerate = write_outcome(factored, &mut inverse, config);
    Ok(Inversion {
        inverse,
        det,
        degenerate,
    })
}

/// Like [`invert_cholesky`], writing the inverse into a caller buffer.
///
/// Returns the determinant (`0.0` on the sentinel path). On an error `inv`
/// is left untouched.
#[tracing::instrument(skip_all, fields(n = mat.nrows()))]
pub fn invert_cholesky_into(
    mat: ArrayView2<'_, f64>,
    inv: &mut Array2<f64>,
    config: &InversionConfig,
) -> Result<f64, LinalgError> {
    ensure_square(mat.dim())?;
    ensure_shape(mat.dim(), inv.dim())?;
    let (factored, det) = cholesky_factor(&mat, config)?;
    write_outcome(factored, inv, config);
    Ok(det)
}

/// Determinant of `L·Lᵀ` given an already computed Cholesky factor `L`.
///
/// Only the diagonal of `factor` is read.
pub fn cholesky_det(factor: ArrayView2<'_, f64>) -> Result<f64, LinalgError> {
    ensure_square(factor.dim())?;
    let d: f64 = factor.diag().iter().product();
    Ok(d * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn assert_identity(a: &Array2<f64>, tol: f64) {
        let n = a.nrows();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(a[[i, j]], expected, epsilon = tol);
            }
        }
    }

    #[test]
    fn lu_inverts_general_matrix() {
        let m = array![[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        let r = invert_lu(m.view(), &InversionConfig::default()).unwrap();
        assert!(!r.is_degenerate());
        assert_identity(&r.inverse().dot(&m), 1e-12);
        assert_abs_diff_eq!(r.det(), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn lu_singular_error_policy() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        let r = invert_lu(m.view(), &InversionConfig::default());
        match r {
            Err(LinalgError::SingularMatrix { det }) => assert!(det.abs() < 1e-6),
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
    }

    #[test]
    fn lu_singular_sentinel_policy_keeps_det() {
        let m = array![[1.0, 2.0], [2.0, 4.0 + 1e-9]];
        let r = invert_lu(m.view(), &InversionConfig::legacy()).unwrap();
        assert!(r.is_degenerate());
        assert!(r.inverse().iter().all(|&v| v == 10000.0));
        assert!(r.det() != 0.0 && r.det().abs() < 1e-6);
    }

    #[test]
    fn lu_into_checks_buffer_shape() {
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        let mut inv = Array2::zeros((3, 3));
        let r = invert_lu_into(m.view(), &mut inv, &InversionConfig::default());
        assert_eq!(
            r,
            Err(LinalgError::ShapeMismatch {
                expected: (2, 2),
                got: (3, 3)
            })
        );
    }

    #[test]
    fn cholesky_into_checks_buffer_shape() {
        let m = array![[4.0, 2.0], [2.0, 3.0]];
        let mut inv = Array2::from_elem((3, 3), 7.0);
        let r = invert_cholesky_into(m.view(), &mut inv, &InversionConfig::default());
        assert_eq!(
            r,
            Err(LinalgError::ShapeMismatch {
                expected: (2, 2),
                got: (3, 3)
            })
        );
        assert!(inv.iter().all(|&v| v == 7.0));

        let rect = Array2::<f64>::zeros((2, 3));
        let mut inv = Array2::zeros((2, 3));
        assert_eq!(
            invert_cholesky_into(rect.view(), &mut inv, &InversionConfig::default()),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn cholesky_into_sentinel_fills_buffer() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        let mut inv = Array2::zeros((2, 2));
        let det = invert_cholesky_into(m.view(), &mut inv, &InversionConfig::legacy()).unwrap();
        assert_eq!(det, 0.0);
        assert!(inv.iter().all(|&v| v == 10000.0));
    }

    #[test]
    fn into_parts_returns_inverse_and_det() {
        let m = array![[4.0, 2.0], [2.0, 3.0]];
        let (inv, det) = invert_cholesky(m.view(), &InversionConfig::default())
            .unwrap()
            .into_parts();
        assert_abs_diff_eq!(det, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[0, 0]], 0.375, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[0, 1]], -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn lu_into_leaves_buffer_on_error() {
        let m = array![[0.0, 0.0], [0.0, 0.0]];
        let mut inv = Array2::from_elem((2, 2), 7.0);
        assert!(invert_lu_into(m.view(), &mut inv, &InversionConfig::default()).is_err());
        assert!(inv.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn rejects_non_square_and_empty() {
        let rect = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            invert_lu(rect.view(), &InversionConfig::default()),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            invert_cholesky(rect.view(), &InversionConfig::default()),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            invert_lu(empty.view(), &InversionConfig::default()),
            Err(LinalgError::EmptyMatrix)
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let m = array![[1.0]];
        let cfg = InversionConfig::new().with_det_threshold(f64::NAN);
        assert!(matches!(
            invert_cholesky(m.view(), &cfg),
            Err(LinalgError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn cholesky_worked_example() {
        let m = array![[4.0, 2.0], [2.0, 3.0]];
        let r = invert_cholesky(m.view(), &InversionConfig::default()).unwrap();
        assert_abs_diff_eq!(r.det(), 8.0, epsilon = 1e-12);
        let inv = r.inverse();
        assert_abs_diff_eq!(inv[[0, 0]], 0.375, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[0, 1]], -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 0]], -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cholesky_not_pd() {
        let m = array![[1.0, 0.0], [0.0, -1.0]];
        assert_eq!(
            invert_cholesky(m.view(), &InversionConfig::default()),
            Err(LinalgError::NotPositiveDefinite)
        );
        let r = invert_cholesky(m.view(), &InversionConfig::legacy()).unwrap();
        assert!(r.is_degenerate());
        assert_eq!(r.det(), 0.0);
        assert!(r.inverse().iter().all(|&v| v == 10000.0));
    }

    #[test]
    fn cholesky_tiny_det_forces_zero() {
        let m = array![[1e-4, 0.0], [0.0, 1e-4]];
        let r = invert_cholesky(m.view(), &InversionConfig::legacy()).unwrap();
        assert_eq!(r.det(), 0.0);
        assert!(r.inverse().iter().all(|&v| v == 10000.0));

        match invert_cholesky(m.view(), &InversionConfig::default()) {
            Err(LinalgError::SingularMatrix { det }) => {
                assert_abs_diff_eq!(det, 1e-8, epsilon = 1e-15)
            }
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
    }

    #[test]
    fn cholesky_det_from_factor() {
        let l = array![[2.0, 0.0], [1.0, 2.0f64.sqrt()]];
        assert_abs_diff_eq!(cholesky_det(l.view()).unwrap(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn invert_and_is_invertible() {
        let m = array![[2.0, 0.0], [0.0, 0.5]];
        let cfg = InversionConfig::default();
        assert!(is_invertible(m.view(), &cfg).unwrap());
        let inv = invert(m.view(), &cfg).unwrap();
        assert_abs_diff_eq!(inv[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[[1, 1]], 2.0, epsilon = 1e-12);

        let s = array![[1.0, 1.0], [1.0, 1.0]];
        assert!(!is_invertible(s.view(), &cfg).unwrap());
        assert_abs_diff_eq!(lu_det(s.view()).unwrap(), 0.0, epsilon = 1e-12);
    }
}
