//! # dynmath-sampling
//!
//! Gaussian sampling primitives for simulating state-space and mixture
//! models. Every sampler takes the random source as `&mut impl Rng`, so
//! a seeded [`rand::rngs::StdRng`] gives reproducible draws.
//!
//! | Function | Draws |
//! |----------|-------|
//! | [`uniform01`] | `U(0, 1)`, both ends excluded |
//! | [`standard_normal`] | `N(0, 1)` by Box–Muller |
//! | [`normal`] | `N(mu, sigma²)` |
//! | [`white_noise`] | independent `N(0, sigma[i]²)` per component |
//! | [`random_diag_matrix`] | diagonal of `|N(0, 1)|` draws |

pub mod config;
pub mod error;
pub mod gaussian;
pub mod noise;

pub use config::SamplingConfig;
pub use error::SamplingError;
pub use gaussian::{normal, standard_normal, uniform01};
pub use noise::{random_diag_matrix, white_noise, white_noise_into};
