use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use super::CommandContext;
use crate::application::{
    restart_container_services, EnsureOutcome, EnsureRequest, Orchestrator, PortSettings,
    RestartOutcome, ServiceRestart,
};
use crate::config::Config;
use crate::domain::entities::ContainerState;
use crate::infrastructure::fs::ConfigDirLock;
use crate::infrastructure::{DockerCli, TcpPortProbe};
use crate::presentation::emit_json;

/// `ai_agent_YYYYMMDD-HHMMSS`
pub fn autogen_name() -> String {
    format!("ai_agent_{}", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Re-read the config under the lock and apply `start`'s edits to the
/// fresh copy, saving only if something changed.
fn apply_start_selection(
    config_dir: &Path,
    name: &str,
    image: Option<&str>,
    select: bool,
) -> Result<Config> {
    let (mut config, _) = Config::load_or_create(config_dir)
        .with_context(|| format!("reloading config from {}", config_dir.display()))?;

    let mut dirty = false;
    if let Some(image) = image {
        config.resolve_image(Some(image))?;
        if config.container_images.get(name).map(String::as_str) != Some(image) {
            config
                .container_images
                .insert(name.to_string(), image.to_string());
            dirty = true;
        }
    }
    if select && config.selected_agent != name {
        config.selected_agent = name.to_string();
        dirty = true;
    }
    if dirty {
        config
            .save(config_dir)
            .context("saving container selection")?;
    }
    Ok(config)
}

pub fn cmd_start(
    ctx: &mut CommandContext,
    name: Option<String>,
    image: Option<String>,
    reset: bool,
    new: bool,
) -> Result<()> {
    let name = if new {
        autogen_name()
    } else {
        ctx.container_name(name)
    };

    let _lock = ConfigDirLock::acquire(&ctx.config_dir)?;
    ctx.config = apply_start_selection(&ctx.config_dir, &name, image.as_deref(), new)?;

    let runtime = DockerCli::new();
    let orch = Orchestrator::new(&runtime, &TcpPortProbe, PortSettings::from(&ctx.config));
    let req = EnsureRequest::for_container(&ctx.config, &name, reset)?;
    let outcome = orch
        .ensure_running(&req)
        .with_context(|| format!("bringing up container '{}'", name))?;

    if ctx.json {
        let (state, host_port) = match outcome {
            EnsureOutcome::Created { host_port } => ("created", Some(host_port)),
            EnsureOutcome::Started => ("started", None),
            EnsureOutcome::AlreadyRunning => ("running", None),
        };
        return emit_json(serde_json::json!({
            "event": "start",
            "name": name,
            "image": req.image_name,
            "state": state,
            "host_port": host_port,
        }));
    }

    match outcome {
        EnsureOutcome::Created { host_port } => {
            println!(
                "Created container '{}' from {} on http://localhost:{}",
                name, req.image_tag, host_port
            );
        }
        EnsureOutcome::Started => println!("Started container '{}'", name),
        EnsureOutcome::AlreadyRunning => println!("Container '{}' is already running", name),
    }
    Ok(())
}

pub fn cmd_stop(ctx: &CommandContext, name: Option<String>) -> Result<()> {
    let name = ctx.container_name(name);
    let runtime = DockerCli::new();
    let orch = Orchestrator::new(&runtime, &TcpPortProbe, PortSettings::from(&ctx.config));
    let found = orch.stop(&name)?;

    if ctx.json {
        let state = match found {
            ContainerState::Absent => "absent",
            ContainerState::Stopped => "not_running",
            ContainerState::Running => "stopped",
        };
        return emit_json(serde_json::json!({
            "event": "stop",
            "name": name,
            "state": state,
        }));
    }

    match found {
        ContainerState::Absent => println!("Container '{}' does not exist", name),
        ContainerState::Stopped => println!("Container '{}' is not running", name),
        ContainerState::Running => println!("Stopped container '{}'", name),
    }
    Ok(())
}

pub fn cmd_restart(ctx: &CommandContext, name: Option<String>) -> Result<()> {
    let name = ctx.container_name(name);
    let runtime = DockerCli::new();
    let orch = Orchestrator::new(&runtime, &TcpPortProbe, PortSettings::from(&ctx.config));
    let outcome = orch.restart(&name)?;

    if ctx.json {
        let (state, was_running) = match outcome {
            RestartOutcome::Missing => ("absent", None),
            RestartOutcome::Restarted { was_running } => ("restarted", Some(was_running)),
        };
        return emit_json(serde_json::json!({
            "event": "restart",
            "name": name,
            "state": state,
            "was_running": was_running,
        }));
    }

    match outcome {
        RestartOutcome::Missing => println!("Container '{}' does not exist", name),
        RestartOutcome::Restarted { .. } => {
            println!("Container '{}' restarted successfully", name)
        }
    }
    Ok(())
}

pub fn cmd_restart_discourse(ctx: &CommandContext, name: Option<String>) -> Result<()> {
    let name = ctx.container_name(name);
    let runtime = DockerCli::new();
    let orch = Orchestrator::new(&runtime, &TcpPortProbe, PortSettings::from(&ctx.config));
    let json = ctx.json;

    let result = restart_container_services(&orch, &ctx.config, &name, |step| {
        if !json {
            println!("{}", step.message())
        }
    })?;

    if json {
        let (state, status) = match &result {
            ServiceRestart::Missing => ("absent", None),
            ServiceRestart::Done { status } => ("restarted", status.as_deref()),
        };
        return emit_json(serde_json::json!({
            "event": "restart_discourse",
            "name": name,
            "state": state,
            "status": status,
        }));
    }

    match result {
        ServiceRestart::Missing => {
            println!("Container '{}' does not exist. Run 'dv start' first.", name)
        }
        ServiceRestart::Done { status } => {
            if let Some(status) = status {
                print!("{}", status);
            }
            println!("Discourse services restarted.");
        }
    }
    Ok(())
}
