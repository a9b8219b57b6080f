//! Restart of the Discourse runit services inside a container
//!
//! A forward-only sequence of privileged scripts. Each script guards its own
//! commands (`|| true`), so a missing service is not an error; a failed exec
//! is logged and the sequence continues. There is no rollback.

use crate::application::lifecycle::Orchestrator;
use crate::config::Config;
use crate::domain::entities::ContainerState;
use crate::domain::ports::{ContainerRuntime, PortProbe};
use crate::error::DvResult;

const STOP_SERVICES: &str = r#"set -e
has_service() { [ -d "/etc/service/$1" ]; }
if has_service unicorn; then sv stop unicorn || true; fi
if has_service ember-cli; then sv stop ember-cli || true; fi
if has_service sidekiq; then sv stop sidekiq || true; fi
sleep 1"#;

// Only processes owned by discourse, so runsv itself survives.
const KILL_LEFTOVERS: &str = r#"set -e
pkill -u discourse -9 -f 'bin/unicorn' 2>/dev/null || true
pkill -u discourse -9 -f 'sidekiq' 2>/dev/null || true
sleep 1"#;

const START_SERVICES: &str = r#"set -e
has_service() { [ -d "/etc/service/$1" ]; }
if has_service sidekiq; then sv start sidekiq || true; fi
if has_service unicorn; then sv start unicorn || true; fi
if has_service ember-cli; then sv start ember-cli || true; fi
sleep 1"#;

const SERVICE_STATUS: &str = r#"set -e
services=()
for s in sidekiq unicorn ember-cli; do
  [ -d "/etc/service/$s" ] && services+=("$s")
done
if [ ${#services[@]} -gt 0 ]; then
  sv status "${services[@]}" || true
else
  echo "No runit services found"
fi"#;

/// Progress points reported while restarting services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStep {
    StartingContainer,
    StoppingServices,
    KillingLeftovers,
    StartingServices,
    QueryingStatus,
}

impl ServiceStep {
    pub fn message(&self) -> &'static str {
        match self {
            ServiceStep::StartingContainer => "Starting container...",
            ServiceStep::StoppingServices => "Stopping services (if present)...",
            ServiceStep::KillingLeftovers => {
                "Killing leftover unicorn/sidekiq processes (if any)..."
            }
            ServiceStep::StartingServices => "Starting services (if present)...",
            ServiceStep::QueryingStatus => "Service status:",
        }
    }
}

/// Result of a service restart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRestart {
    /// The container does not exist; nothing was done
    Missing,
    Done {
        /// `sv status` output, if the status exec succeeded
        status: Option<String>,
    },
}

fn bash(script: &str) -> Vec<String> {
    vec!["bash".to_string(), "-lc".to_string(), script.to_string()]
}

/// Restart unicorn, sidekiq and ember-cli inside `name`, starting the
/// container first if it is stopped.
pub fn restart_services<R, P, F>(
    orch: &Orchestrator<'_, R, P>,
    name: &str,
    workdir: &str,
    mut on_step: F,
) -> DvResult<ServiceRestart>
where
    R: ContainerRuntime + ?Sized,
    P: PortProbe + ?Sized,
    F: FnMut(ServiceStep),
{
    let runtime = orch.runtime();
    match runtime.state(name)? {
        ContainerState::Absent => return Ok(ServiceRestart::Missing),
        ContainerState::Stopped => {
            on_step(ServiceStep::StartingContainer);
            orch.start_if_stopped(name)?;
        }
        ContainerState::Running => {}
    }

    for (step, script) in [
        (ServiceStep::StoppingServices, STOP_SERVICES),
        (ServiceStep::KillingLeftovers, KILL_LEFTOVERS),
        (ServiceStep::StartingServices, START_SERVICES),
    ] {
        on_step(step);
        if let Err(e) = runtime.exec_as_root(name, workdir, &bash(script)) {
            tracing::warn!(name, step = ?step, error = %e, "service script failed, continuing");
        }
    }

    on_step(ServiceStep::QueryingStatus);
    let status = match runtime.exec_as_root(name, workdir, &bash(SERVICE_STATUS)) {
        Ok(out) => Some(out),
        Err(e) => {
            tracing::warn!(name, error = %e, "service status query failed");
            None
        }
    };
    Ok(ServiceRestart::Done { status })
}

/// [`restart_services`] for a container whose workdir comes from the image
/// it was created from. A missing container is reported before the image is
/// looked up, so a stale mapping cannot mask it.
pub fn restart_container_services<R, P, F>(
    orch: &Orchestrator<'_, R, P>,
    config: &Config,
    name: &str,
    on_step: F,
) -> DvResult<ServiceRestart>
where
    R: ContainerRuntime + ?Sized,
    P: PortProbe + ?Sized,
    F: FnMut(ServiceStep),
{
    if orch.runtime().state(name)? == ContainerState::Absent {
        return Ok(ServiceRestart::Missing);
    }
    let (_, image) = config.image_for_container(name)?;
    restart_services(orch, name, &image.workdir, on_step)
}
