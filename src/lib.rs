//! # dynmath
//!
//! Dense linear-algebra and probability utilities for estimating
//! state-space and mixture models.
//!
//! The workspace is split into three crates, re-exported here:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`linalg`] | `dynmath-linalg` | LU / Cholesky inversion, symmetric packing, dense helpers |
//! | [`prob`] | `dynmath-prob` | MVN likelihood, logistic, softmax, log-space normalisation |
//! | [`sampling`] | `dynmath-sampling` | Box–Muller Gaussian sampling |
//!
//! This crate adds a TOML configuration layer ([`config`], [`convert`]) and
//! tracing setup ([`logging`]).
//!
//! ```
//! use dynmath::config::DynmathConfig;
//! use dynmath::convert::build_inversion_config;
//! use dynmath::linalg::invert_lu;
//! use ndarray::array;
//!
//! let cfg = DynmathConfig::from_toml_str("[inversion]\non_singular = \"sentinel\"\n").unwrap();
//! let inv_cfg = build_inversion_config(&cfg.inversion).unwrap();
//! let r = invert_lu(array![[1.0, 2.0], [2.0, 4.0]].view(), &inv_cfg).unwrap();
//! assert!(r.is_degenerate());
//! ```

pub mod config;
pub mod convert;
pub mod logging;

pub use dynmath_linalg as linalg;
pub use dynmath_prob as prob;
pub use dynmath_sampling as sampling;
