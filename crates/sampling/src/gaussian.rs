//! Scalar uniform and Gaussian draws.

use std::f64::consts::PI;

use rand::Rng;
use rand::distr::Open01;

use crate::error::SamplingError;

/// Draws a uniform value strictly inside `(0, 1)`.
///
/// Both endpoints are excluded so the result is always safe to pass to
/// `ln` in [`standard_normal`].
pub fn uniform01(rng: &mut impl Rng) -> f64 {
    rng.sample(Open01)
}

/// Draws a standard normal value with the Box–Muller transform.
///
/// Uses two uniforms `u1, u2` in `(0, 1)` and returns
/// `sqrt(-2 ln u1) · cos(2π u2)`. The sine branch is discarded, so every
/// call consumes exactly two uniforms.
///
/// # Example
///
/// ```
/// use dynmath_sampling::standard_normal;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(standard_normal(&mut rng).is_finite());
/// ```
pub fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1 = uniform01(rng);
    let u2 = uniform01(rng);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Draws from `N(mu, sigma²)` as `mu + sigma · standard_normal()`.
///
/// `sigma == 0.0` is allowed and returns `mu`.
///
/// # Errors
///
/// - [`SamplingError::InvalidMean`] when `mu` is not finite.
/// - [`SamplingError::InvalidSigma`] when `sigma` is negative or not finite.
pub fn normal(mu: f64, sigma: f64, rng: &mut impl Rng) -> Result<f64, SamplingError> {
    if !mu.is_finite() {
        return Err(SamplingError::InvalidMean { mu });
    }
    if !valid_sigma(sigma) {
        return Err(SamplingError::InvalidSigma { sigma });
    }
    Ok(mu + sigma * standard_normal(rng))
}

pub(crate) fn valid_sigma(sigma: f64) -> bool {
    sigma.is_finite() && sigma >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_is_open_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100_000 {
            let u = uniform01(&mut rng);
            assert!(u > 0.0 && u < 1.0, "u = {u}");
        }
    }

    #[test]
    fn standard_normal_is_deterministic_under_seed() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        for _ in 0..100 {
            assert_eq!(standard_normal(&mut a), standard_normal(&mut b));
        }
    }

    #[test]
    fn standard_normal_matches_manual_transform() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let z = standard_normal(&mut a);
        let u1: f64 = b.sample(Open01);
        let u2: f64 = b.sample(Open01);
        assert_eq!(z, (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos());
    }

    #[test]
    fn normal_shifts_and_scales() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let x = normal(3.0, 2.0, &mut a).unwrap();
        let z = standard_normal(&mut b);
        assert_eq!(x, 3.0 + 2.0 * z);
    }

    #[test]
    fn normal_zero_sigma_returns_mean() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(normal(-1.5, 0.0, &mut rng), Ok(-1.5));
    }

    #[test]
    fn normal_rejects_bad_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            normal(0.0, -1.0, &mut rng),
            Err(SamplingError::InvalidSigma { sigma: -1.0 })
        );
        assert!(matches!(
            normal(0.0, f64::NAN, &mut rng),
            Err(SamplingError::InvalidSigma { .. })
        ));
        assert_eq!(
            normal(f64::INFINITY, 1.0, &mut rng),
            Err(SamplingError::InvalidMean { mu: f64::INFINITY })
        );
    }
}
