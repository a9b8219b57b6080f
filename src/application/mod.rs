//! Application Layer
//!
//! Use cases composed from domain logic and infrastructure ports.
//!
//! - `assets` - Dockerfile resolution (env override, local override, embedded default)
//! - `ports` - Free host port search
//! - `lifecycle` - Idempotent container bring-up, stop and restart
//! - `services` - Restart of runit services inside a container
//! - `images` - Image builds and container listing for the selected image

pub mod assets;
pub mod images;
pub mod lifecycle;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod fake_runtime;

pub use lifecycle::{EnsureOutcome, EnsureRequest, Orchestrator, PortSettings, RestartOutcome};
pub use services::{restart_container_services, restart_services, ServiceRestart, ServiceStep};
