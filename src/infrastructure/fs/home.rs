//! Config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` reads platform APIs on some systems, so tests set
//! `DV_CONFIG_DIR` to point dv at a temporary directory instead.

use std::path::PathBuf;

/// Environment variable overriding the config directory.
pub const DV_CONFIG_DIR_VAR: &str = "DV_CONFIG_DIR";

/// The directory holding `config.toml` and materialized assets.
///
/// `DV_CONFIG_DIR` if set and non-empty, else `<platform config dir>/dv`.
/// Returns `None` only when neither is available.
pub fn dv_config_dir() -> Option<PathBuf> {
    std::env::var_os(DV_CONFIG_DIR_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("dv")))
}
