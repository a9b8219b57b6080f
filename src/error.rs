//! Error types for dv
//!
//! Library code returns `DvError`; the binary wraps it in `anyhow` with
//! command-level context.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dv operations
pub type DvResult<T> = Result<T, DvError>;

/// Main error type for dv operations
#[derive(Error, Debug)]
pub enum DvError {
    /// An asset override variable points at something that is not a file
    #[error("{var} path does not exist: {}", path.display())]
    EnvOverrideMissing { var: String, path: PathBuf },

    /// Image name not present in the config
    #[error("unknown image '{name}'")]
    UnknownImage { name: String },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error on a known path
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error without path context
    #[error("IO error: {0}")]
    IoBare(#[from] std::io::Error),

    /// Container runtime command exited unsuccessfully
    #[error("`{command}` failed: {message}")]
    Runtime { command: String, message: String },

    /// Container runtime binary could not be launched
    #[error("failed to launch `{program}`: {source}")]
    RuntimeSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Every port from the starting port upward is taken
    #[error("no free TCP port at or above {start}")]
    PortsExhausted { start: u16 },
}

impl DvError {
    /// Attach a path to an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DvError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error comes from bad user configuration rather than
    /// the filesystem or the runtime.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DvError::EnvOverrideMissing { .. }
                | DvError::UnknownImage { .. }
                | DvError::InvalidConfig { .. }
        )
    }
}
