//! dv - local container manager for Discourse development agents
//!
//! dv keeps a named Docker container for an "agent" image running on a free
//! host port, and materializes the Dockerfiles it builds from. Embedded
//! defaults are refreshed on disk only when their digest changes; user
//! overrides (environment variable or `<K>.local`) always take precedence.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EnsureOutcome, EnsureRequest, Orchestrator, PortSettings};
pub use config::{Config, ImageConfig};
pub use domain::entities::{AssetKind, Resolution};
pub use domain::ports::{ContainerRuntime, PortProbe};
pub use error::{DvError, DvResult};
pub use infrastructure::{DockerCli, TcpPortProbe};
