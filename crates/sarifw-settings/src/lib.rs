//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Reading the config file and the environment is the caller's job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::SarifwConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Default location of the optional config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".sarifw.toml";

/// Environment variable overriding `output_dir`.
pub const ENV_OUTPUT_DIR: &str = "SARIFW_OUTPUT_DIR";
/// Environment variable overriding `editor`.
pub const ENV_EDITOR: &str = "SARIFW_EDITOR";

pub const DEFAULT_OUTPUT_DIR: &str = ".sarifw/";
pub const DEFAULT_EDITOR: &str = "code";

/// Parse `.sarifw.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SarifwConfigV1> {
    let cfg: SarifwConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + config file + overrides).
pub fn resolve_config(cfg: SarifwConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
