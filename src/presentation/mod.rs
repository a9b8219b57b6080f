//! Presentation Layer
//!
//! - `cli` - clap argument definitions
//! - `output` - JSON emission and log subscriber setup

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, ConfigAction, RestartTarget};
pub use output::{emit_json, init_logging};
