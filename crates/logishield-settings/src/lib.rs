//! Config parsing and regulation-table resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{LogishieldConfigV1, RuleConfig};
pub use presets::{preset, preset_names, DEFAULT_PROFILE};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `logishield.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LogishieldConfigV1> {
    let cfg: LogishieldConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the regulation table used by the engine (preset + overrides + per-rule config).
pub fn resolve_config(
    cfg: LogishieldConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
