//! Config parsing and check resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CheckConfig, PomguardConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{DEFAULT_MANIFEST, Overrides, ResolvedConfig};

/// Parse `pomguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PomguardConfigV1> {
    let cfg: PomguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the checks (defaults + file + overrides).
pub fn resolve_config(
    cfg: PomguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
