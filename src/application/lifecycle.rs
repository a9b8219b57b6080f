//! Container lifecycle orchestration
//!
//! Brings a named container to the running state. Every decision starts from
//! a fresh runtime query; nothing about container state is remembered
//! between calls, so re-running after a failure recovers from whatever the
//! runtime left behind.

use crate::application::ports::find_free_port;
use crate::config::Config;
use crate::domain::entities::{ContainerState, RunSpec};
use crate::domain::ports::{ContainerRuntime, PortProbe};
use crate::error::DvResult;

/// What `ensure_running` should bring up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureRequest {
    pub name: String,
    pub workdir: String,
    pub image_tag: String,
    pub image_name: String,
    /// Remove any existing container first
    pub reset: bool,
}

impl EnsureRequest {
    /// Request for `name` using the image it was recorded with, or the
    /// selected image.
    pub fn for_container(config: &Config, name: &str, reset: bool) -> DvResult<Self> {
        let (image_name, image) = config.image_for_container(name)?;
        Ok(Self {
            name: name.to_string(),
            workdir: image.workdir.clone(),
            image_tag: image.tag.clone(),
            image_name: image_name.to_string(),
            reset,
        })
    }
}

/// What `ensure_running` had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created { host_port: u16 },
    Started,
    AlreadyRunning,
}

/// What `restart` found and did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    Missing,
    Restarted { was_running: bool },
}

/// Host/container port settings for new containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSettings {
    pub host_starting_port: u16,
    pub container_port: u16,
}

impl From<&Config> for PortSettings {
    fn from(config: &Config) -> Self {
        Self {
            host_starting_port: config.host_starting_port,
            container_port: config.container_port,
        }
    }
}

/// Sequences runtime calls for one container at a time
pub struct Orchestrator<'a, R: ContainerRuntime + ?Sized, P: PortProbe + ?Sized> {
    runtime: &'a R,
    probe: &'a P,
    ports: PortSettings,
}

impl<'a, R: ContainerRuntime + ?Sized, P: PortProbe + ?Sized> Orchestrator<'a, R, P> {
    pub fn new(runtime: &'a R, probe: &'a P, ports: PortSettings) -> Self {
        Self {
            runtime,
            probe,
            ports,
        }
    }

    pub fn runtime(&self) -> &'a R {
        self.runtime
    }

    /// Bring `req.name` to Running, creating it if absent.
    ///
    /// Absent → create on a free port; Stopped → start; Running → no-op.
    /// With `reset`, an existing container is stopped and removed first.
    /// Runtime failures are returned as-is with no cleanup.
    pub fn ensure_running(&self, req: &EnsureRequest) -> DvResult<EnsureOutcome> {
        let mut state = self.runtime.state(&req.name)?;

        if req.reset && state != ContainerState::Absent {
            if state == ContainerState::Running {
                self.runtime.stop(&req.name)?;
            }
            self.runtime.remove(&req.name)?;
            tracing::info!(name = %req.name, "removed container for reset");
            state = ContainerState::Absent;
        }

        match state {
            ContainerState::Absent => {
                let host_port = find_free_port(self.probe, self.ports.host_starting_port)?;
                let spec = RunSpec::owned(
                    &req.name,
                    &req.workdir,
                    &req.image_tag,
                    &req.image_name,
                    host_port,
                    self.ports.container_port,
                );
                self.runtime.run_detached(&spec)?;
                tracing::info!(
                    name = %req.name,
                    image = %req.image_tag,
                    host_port,
                    "created container"
                );
                Ok(EnsureOutcome::Created { host_port })
            }
            ContainerState::Stopped => {
                self.runtime.start(&req.name)?;
                tracing::info!(name = %req.name, "started container");
                Ok(EnsureOutcome::Started)
            }
            ContainerState::Running => Ok(EnsureOutcome::AlreadyRunning),
        }
    }

    /// Start `name` if it exists and is stopped. Returns the state found.
    pub fn start_if_stopped(&self, name: &str) -> DvResult<ContainerState> {
        let state = self.runtime.state(name)?;
        if state == ContainerState::Stopped {
            self.runtime.start(name)?;
            tracing::info!(name, "started container");
        }
        Ok(state)
    }

    /// Stop `name` if it is running. Returns the state found.
    pub fn stop(&self, name: &str) -> DvResult<ContainerState> {
        let state = self.runtime.state(name)?;
        if state == ContainerState::Running {
            self.runtime.stop(name)?;
            tracing::info!(name, "stopped container");
        }
        Ok(state)
    }

    /// Stop (if running) then start an existing container.
    pub fn restart(&self, name: &str) -> DvResult<RestartOutcome> {
        let state = self.runtime.state(name)?;
        if state == ContainerState::Absent {
            return Ok(RestartOutcome::Missing);
        }
        let was_running = state == ContainerState::Running;
        if was_running {
            self.runtime.stop(name)?;
        }
        self.runtime.start(name)?;
        Ok(RestartOutcome::Restarted { was_running })
    }
}
