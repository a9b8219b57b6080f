//! Advisory lock on the config directory
//!
//! Serializes concurrent dv invocations that touch the same config
//! directory (asset materialization, container creation). The lock is
//! released when the guard is dropped.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{DvError, DvResult};

const LOCK_FILE: &str = ".dv.lock";

/// Held exclusive lock on `<config_dir>/.dv.lock`
#[derive(Debug)]
pub struct ConfigDirLock {
    file: File,
    path: PathBuf,
}

impl ConfigDirLock {
    /// Block until the lock is acquired, creating the directory if needed.
    pub fn acquire(config_dir: &Path) -> DvResult<Self> {
        fs::create_dir_all(config_dir).map_err(|e| DvError::io(config_dir, e))?;
        let path = config_dir.join(LOCK_FILE);
        let file = File::create(&path).map_err(|e| DvError::io(&path, e))?;
        file.lock_exclusive().map_err(|e| DvError::io(&path, e))?;
        tracing::trace!(path = %path.display(), "acquired config dir lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConfigDirLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
