//! Materialize-if-stale
//!
//! Writes a blob and its digest sidecar to disk only when the sidecar does
//! not already record the blob's digest. The blob is written before the
//! sidecar, so an interrupted write leaves a stale sidecar and the next call
//! rewrites both.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::value_objects::ContentHash;
use crate::error::{DvError, DvResult};

/// Mode for materialized files: owner read/write, world readable.
pub const MATERIALIZED_MODE: u32 = 0o644;

/// What to materialize and where
#[derive(Debug, Clone, Copy)]
pub struct Materialization<'a> {
    pub target: &'a Path,
    pub sidecar: &'a Path,
    pub content: &'a [u8],
    pub digest: &'a ContentHash,
}

/// Whether the sidecar at `sidecar` disagrees with `digest`.
///
/// A missing sidecar means stale; any other read failure is an error.
pub fn needs_write(sidecar: &Path, digest: &ContentHash) -> DvResult<bool> {
    match fs::read(sidecar) {
        Ok(persisted) => Ok(!digest.matches_persisted(&persisted)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(DvError::io(sidecar, e)),
    }
}

/// Bring `target` and `sidecar` up to date. Returns `true` if anything was
/// written.
pub fn materialize_if_stale(m: Materialization<'_>) -> DvResult<bool> {
    if !needs_write(m.sidecar, m.digest)? {
        tracing::debug!(path = %m.target.display(), "materialized asset is current");
        return Ok(false);
    }

    write_atomic(m.target, m.content, MATERIALIZED_MODE)?;
    write_atomic(
        m.sidecar,
        m.digest.sidecar_contents().as_bytes(),
        MATERIALIZED_MODE,
    )?;
    tracing::info!(
        path = %m.target.display(),
        digest = %m.digest,
        "materialized embedded asset"
    );
    Ok(true)
}

/// Write `content` to `path` via a temp file in the same directory and a
/// rename, so readers never see a half-written file.
pub fn write_atomic(path: &Path, content: &[u8], mode: u32) -> DvResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| DvError::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| DvError::io(parent, e))?;
    tmp.write_all(content).map_err(|e| DvError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| DvError::io(tmp.path(), e))?;
    set_mode(tmp.path(), mode)?;
    tmp.persist(path).map_err(|e| DvError::io(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> DvResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| DvError::io(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> DvResult<()> {
    Ok(())
}
