//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::config::{InversionToml, SamplingToml};

use dynmath_linalg::{InversionConfig, SingularPolicy};
use dynmath_sampling::SamplingConfig;

/// Parses a degenerate-matrix policy name into the corresponding enum variant.
pub fn parse_singular_policy(s: &str) -> Result<SingularPolicy> {
    match s.to_lowercase().as_str() {
        "error" => Ok(SingularPolicy::Error),
        "sentinel" => Ok(SingularPolicy::Sentinel),
        other => bail!("unknown singular-matrix policy: {other:?}"),
    }
}

/// Builds a validated [`InversionConfig`] from the TOML inversion settings.
pub fn build_inversion_config(t: &InversionToml) -> Result<InversionConfig> {
    let cfg = InversionConfig::new()
        .with_det_threshold(t.det_threshold)
        .with_sentinel(t.sentinel)
        .with_on_singular(parse_singular_policy(&t.on_singular)?);
    cfg.validate().context("invalid [inversion] settings")?;
    debug!(
        det_threshold = cfg.det_threshold(),
        sentinel = cfg.sentinel(),
        on_singular = ?cfg.on_singular(),
        "built inversion config"
    );
    Ok(cfg)
}

/// Builds a [`SamplingConfig`] from the TOML sampling settings.
pub fn build_sampling_config(t: &SamplingToml) -> SamplingConfig {
    match t.seed {
        Some(seed) => SamplingConfig::new().with_seed(seed),
        None => SamplingConfig::new(),
    }
}
