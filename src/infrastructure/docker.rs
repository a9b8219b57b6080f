//! Docker CLI runtime
//!
//! Implements the ContainerRuntime port by invoking the `docker` binary.
//! Each method is one process invocation; no state is kept between calls.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::domain::entities::{parse_labels, ContainerSummary, RunSpec};
use crate::domain::ports::ContainerRuntime;
use crate::error::{DvError, DvResult};

/// Environment variable naming the docker binary (default `docker`)
pub const DV_DOCKER_VAR: &str = "DV_DOCKER";

const LIST_FORMAT: &str = "{{.Names}}\t{{.Image}}\t{{.Labels}}";

/// Container runtime backed by the docker CLI
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    /// Use `$DV_DOCKER` if set, else `docker` from PATH.
    pub fn new() -> Self {
        let program = std::env::var(DV_DOCKER_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "docker".to_string());
        Self { program }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn render(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn output(&self, args: &[String]) -> DvResult<Output> {
        tracing::debug!(command = %self.render(args), "invoking runtime");
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DvError::RuntimeSpawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Run and require success; returns stdout.
    fn checked(&self, args: &[String]) -> DvResult<String> {
        let output = self.output(args)?;
        if !output.status.success() {
            return Err(DvError::Runtime {
                command: self.render(args),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// `docker inspect` a single field; `None` when the container is unknown.
    fn inspect(&self, name: &str, format: &str) -> DvResult<Option<String>> {
        let output = self.output(&args(&[
            "inspect",
            "--type",
            "container",
            "--format",
            format,
            name,
        ]))?;
        if output.status.success() {
            Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
        } else {
            Ok(None)
        }
    }
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Arguments for `docker run` creating a detached container from `spec`.
pub fn run_detached_args(spec: &RunSpec) -> Vec<String> {
    let mut out = args(&["run", "-d", "--name", &spec.name]);
    if !spec.workdir.is_empty() {
        out.push("-w".to_string());
        out.push(spec.workdir.clone());
    }
    out.push("-p".to_string());
    out.push(format!("{}:{}", spec.host_port, spec.container_port));
    for (key, value) in &spec.labels {
        out.push("--label".to_string());
        out.push(format!("{}={}", key, value));
    }
    for (key, value) in &spec.env {
        out.push("-e".to_string());
        out.push(format!("{}={}", key, value));
    }
    out.push(spec.image_tag.clone());
    out
}

/// Arguments for `docker exec` running `argv` as root.
pub fn exec_as_root_args(name: &str, workdir: &str, argv: &[String]) -> Vec<String> {
    let mut out = args(&["exec", "-u", "root"]);
    if !workdir.is_empty() {
        out.push("-w".to_string());
        out.push(workdir.to_string());
    }
    out.push(name.to_string());
    out.extend(argv.iter().cloned());
    out
}

/// Parse `docker ps -a` output in [`LIST_FORMAT`].
pub fn parse_container_list(text: &str) -> Vec<ContainerSummary> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.splitn(3, '\t');
            let name = parts.next()?.trim();
            let image = parts.next()?.trim();
            let labels = parts.next().map(parse_labels).unwrap_or_default();
            Some(ContainerSummary {
                name: name.to_string(),
                image: image.to_string(),
                labels,
            })
        })
        .collect()
}

impl ContainerRuntime for DockerCli {
    fn exists(&self, name: &str) -> DvResult<bool> {
        Ok(self.inspect(name, "{{.Name}}")?.is_some())
    }

    fn running(&self, name: &str) -> DvResult<bool> {
        Ok(self.inspect(name, "{{.State.Running}}")?.as_deref() == Some("true"))
    }

    fn start(&self, name: &str) -> DvResult<()> {
        self.checked(&args(&["start", name])).map(drop)
    }

    fn stop(&self, name: &str) -> DvResult<()> {
        self.checked(&args(&["stop", name])).map(drop)
    }

    fn remove(&self, name: &str) -> DvResult<()> {
        self.checked(&args(&["rm", name])).map(drop)
    }

    fn run_detached(&self, spec: &RunSpec) -> DvResult<()> {
        self.checked(&run_detached_args(spec)).map(drop)
    }

    fn exec_as_root(&self, name: &str, workdir: &str, argv: &[String]) -> DvResult<String> {
        let cmd = exec_as_root_args(name, workdir, argv);
        let output = self.output(&cmd)?;
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            return Err(DvError::Runtime {
                command: self.render(&cmd),
                message: combined.trim().to_string(),
            });
        }
        Ok(combined)
    }

    fn list_containers(&self) -> DvResult<Vec<ContainerSummary>> {
        let stdout = self.checked(&args(&["ps", "-a", "--format", LIST_FORMAT]))?;
        Ok(parse_container_list(&stdout))
    }

    fn build(&self, tag: &str, dockerfile: &Path, context: &Path) -> DvResult<()> {
        let cmd = vec![
            "build".to_string(),
            "-f".to_string(),
            dockerfile.display().to_string(),
            "-t".to_string(),
            tag.to_string(),
            context.display().to_string(),
        ];
        tracing::debug!(command = %self.render(&cmd), "invoking runtime");
        let status = Command::new(&self.program)
            .args(&cmd)
            .status()
            .map_err(|source| DvError::RuntimeSpawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(DvError::Runtime {
                command: self.render(&cmd),
                message: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}
