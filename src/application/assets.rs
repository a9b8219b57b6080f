//! Asset resolution
//!
//! Picks the effective file for an asset kind. Sources are tried in a fixed
//! order and the first one that yields a path wins:
//!
//! 1. the asset's environment variable (must name an existing file)
//! 2. `<config dir>/<K>.local`
//! 3. the embedded default, materialized to `<config dir>/<K>` and refreshed
//!    whenever its digest differs from `<config dir>/<K>.sha256`

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetDescriptor, AssetKind, Resolution};
use crate::error::{DvError, DvResult};
use crate::infrastructure::assets;
use crate::infrastructure::fs::{materialize_if_stale, ConfigDirLock, Materialization};

/// Override sources, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverrideSource {
    Environment,
    LocalFile,
}

const OVERRIDE_CHAIN: [OverrideSource; 2] = [OverrideSource::Environment, OverrideSource::LocalFile];

/// Resolve the embedded asset of `kind` against the process environment.
pub fn resolve(kind: AssetKind, config_dir: &Path) -> DvResult<Resolution> {
    resolve_with_env(assets::embedded(kind), config_dir, |var| std::env::var_os(var))
}

/// Resolve `asset`, reading override variables through `env`.
pub fn resolve_with_env<F>(asset: &AssetDescriptor, config_dir: &Path, env: F) -> DvResult<Resolution>
where
    F: Fn(&str) -> Option<OsString>,
{
    for source in OVERRIDE_CHAIN {
        let found = match source {
            OverrideSource::Environment => from_environment(asset, &env)?,
            OverrideSource::LocalFile => from_local_file(asset, config_dir),
        };
        if let Some(resolution) = found {
            tracing::info!(
                asset = asset.file_name(),
                source = ?source,
                path = %resolution.effective_path.display(),
                "using asset override"
            );
            return Ok(resolution);
        }
    }
    from_embedded(asset, config_dir)
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

fn from_environment<F>(asset: &AssetDescriptor, env: &F) -> DvResult<Option<Resolution>>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = asset.env_var();
    let Some(value) = env(var).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let path = PathBuf::from(value);
    if !is_regular_file(&path) {
        return Err(DvError::EnvOverrideMissing {
            var: var.to_string(),
            path,
        });
    }
    // A bare file name has an empty parent; build from the working directory.
    let context_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();
    Ok(Some(Resolution {
        effective_path: path,
        context_dir,
        used_override: true,
    }))
}

fn from_local_file(asset: &AssetDescriptor, config_dir: &Path) -> Option<Resolution> {
    let path = asset.local_override_path(config_dir);
    is_regular_file(&path).then(|| Resolution {
        effective_path: path,
        context_dir: config_dir.to_path_buf(),
        used_override: true,
    })
}

fn from_embedded(asset: &AssetDescriptor, config_dir: &Path) -> DvResult<Resolution> {
    fs::create_dir_all(config_dir).map_err(|e| DvError::io(config_dir, e))?;
    let _lock = ConfigDirLock::acquire(config_dir)?;

    let target = asset.target_path(config_dir);
    let sidecar = asset.sidecar_path(config_dir);
    materialize_if_stale(Materialization {
        target: &target,
        sidecar: &sidecar,
        content: asset.content(),
        digest: asset.digest(),
    })?;

    Ok(Resolution {
        effective_path: target,
        context_dir: config_dir.to_path_buf(),
        used_override: false,
    })
}
