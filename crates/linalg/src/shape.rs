//! Precondition checks shared by the public entry points.

use crate::error::LinalgError;

/// Fails unless `dim` describes a non-empty square matrix.
pub(crate) fn ensure_square(dim: (usize, usize)) -> Result<usize, LinalgError> {
    let (rows, cols) = dim;
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    Ok(rows)
}

/// Fails unless `got == expected`.
pub(crate) fn ensure_shape(
    expected: (usize, usize),
    got: (usize, usize),
) -> Result<(), LinalgError> {
    if expected != got {
        return Err(LinalgError::ShapeMismatch { expected, got });
    }
    Ok(())
}
