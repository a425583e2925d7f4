//! TOML configuration document.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level dynmath configuration.
///
/// ```toml
/// [inversion]
/// det_threshold = 1e-6
/// sentinel = 10000.0
/// on_singular = "error"   # or "sentinel"
///
/// [sampling]
/// seed = 42
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DynmathConfig {
    /// Matrix inversion settings.
    #[serde(default)]
    pub inversion: InversionToml,

    /// Random sampling settings.
    #[serde(default)]
    pub sampling: SamplingToml,
}

impl DynmathConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse TOML config")
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let cfg = Self::from_toml_str(&toml_str)?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InversionToml {
    #[serde(default = "default_det_threshold")]
    pub det_threshold: f64,
    #[serde(default = "default_sentinel")]
    pub sentinel: f64,
    #[serde(default = "default_on_singular")]
    pub on_singular: String,
}

impl Default for InversionToml {
    fn default() -> Self {
        Self {
            det_threshold: default_det_threshold(),
            sentinel: default_sentinel(),
            on_singular: default_on_singular(),
        }
    }
}

fn default_det_threshold() -> f64 {
    dynmath_linalg::DEFAULT_DET_THRESHOLD
}
fn default_sentinel() -> f64 {
    dynmath_linalg::DEFAULT_SENTINEL
}
fn default_on_singular() -> String {
    "error".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingToml {
    /// RNG seed; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}
