//! Vector and matrix draws built on [`standard_normal`].

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use tracing::debug;

use crate::error::SamplingError;
use crate::gaussian::{standard_normal, valid_sigma};

/// Independent zero-mean Gaussian noise with per-component deviation.
///
/// Component `i` is `sigma[i] · standard_normal()`, drawn in index order.
///
/// # Errors
///
/// [`SamplingError::InvalidSigmaEntry`] for the first negative or
/// non-finite deviation. Nothing is drawn in that case.
///
/// # Example
///
/// ```
/// use dynmath_sampling::white_noise;
/// use ndarray::array;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let e = white_noise(array![1.0, 0.0, 2.0].view(), &mut rng).unwrap();
/// assert_eq!(e.len(), 3);
/// assert_eq!(e[1], 0.0);
/// ```
pub fn white_noise(
    sigma: ArrayView1<'_, f64>,
    rng: &mut impl Rng,
) -> Result<Array1<f64>, SamplingError> {
    let mut out = Array1::zeros(sigma.len());
    white_noise_into(sigma, rng, &mut out)?;
    Ok(out)
}

/// Like [`white_noise`], writing into a caller buffer.
///
/// # Errors
///
/// As [`white_noise`], plus [`SamplingError::BufferLengthMismatch`] when
/// `out` and `sigma` differ in length.
pub fn white_noise_into(
    sigma: ArrayView1<'_, f64>,
    rng: &mut impl Rng,
    out: &mut Array1<f64>,
) -> Result<(), SamplingError> {
    if out.len() != sigma.len() {
        return Err(SamplingError::BufferLengthMismatch {
            expected: sigma.len(),
            got: out.len(),
        });
    }
    if let Some((index, &s)) = sigma.iter().enumerate().find(|(_, s)| !valid_sigma(**s)) {
        return Err(SamplingError::InvalidSigmaEntry { index, sigma: s });
    }

    debug!(n = sigma.len(), "drawing white noise");
    for (o, &s) in out.iter_mut().zip(sigma.iter()) {
        *o = s * standard_normal(rng);
    }
    Ok(())
}

/// Diagonal `n×n` matrix with `|standard_normal()|` on the diagonal.
///
/// Every diagonal entry is non-negative and the off-diagonal entries are
/// zero. `n == 0` gives an empty `0×0` matrix.
pub fn random_diag_matrix(n: usize, rng: &mut impl Rng) -> Array2<f64> {
    let mut out = Array2::zeros((n, n));
    for d in out.diag_mut() {
        *d = standard_normal(rng).abs();
    }
    out
}
