//! File System Helpers
//!
//! Atomic writes, digest-gated materialization and config dir locking.

mod home;
mod lock;
mod materialize;

pub use home::{dv_config_dir, DV_CONFIG_DIR_VAR};
pub use lock::ConfigDirLock;
pub use materialize::{
    materialize_if_stale, needs_write, write_atomic, Materialization, MATERIALIZED_MODE,
};
