//! ContainerRuntime port - abstraction over the local container engine
//!
//! Every method is a single, bounded call into the runtime. Implementations
//! must not cache container state: callers re-query on every decision.

use std::path::Path;

use crate::domain::entities::{ContainerState, ContainerSummary, RunSpec};
use crate::error::DvResult;

/// Capability surface dv needs from a container runtime
///
/// Implementations:
/// - `DockerCli` - shells out to the `docker` binary
/// - `FakeRuntime` - in-memory, for tests
pub trait ContainerRuntime {
    /// Whether a container with this name exists (running or not)
    fn exists(&self, name: &str) -> DvResult<bool>;

    /// Whether the named container is currently running
    fn running(&self, name: &str) -> DvResult<bool>;

    fn start(&self, name: &str) -> DvResult<()>;

    fn stop(&self, name: &str) -> DvResult<()>;

    fn remove(&self, name: &str) -> DvResult<()>;

    /// Create and start a container in the background
    fn run_detached(&self, spec: &RunSpec) -> DvResult<()>;

    /// Run `argv` inside the container as root, returning combined stdout/stderr
    fn exec_as_root(&self, name: &str, workdir: &str, argv: &[String]) -> DvResult<String>;

    /// All containers known to the runtime, running or not
    fn list_containers(&self) -> DvResult<Vec<ContainerSummary>>;

    /// Build `tag` from a Dockerfile and context directory
    fn build(&self, tag: &str, dockerfile: &Path, context: &Path) -> DvResult<()>;

    /// Current state, derived from `exists` and `running`
    fn state(&self, name: &str) -> DvResult<ContainerState> {
        if !self.exists(name)? {
            return Ok(ContainerState::Absent);
        }
        if self.running(name)? {
            Ok(ContainerState::Running)
        } else {
            Ok(ContainerState::Stopped)
        }
    }
}
