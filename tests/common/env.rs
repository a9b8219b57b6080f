//! Test environment for isolated dv testing.
//!
//! Provides `TestEnv` - a temp config directory plus a fake `docker`
//! binary, and helpers to run the dv CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a dv CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: config dir and a scratch dir for fake tools.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub scratch: TempDir,
    docker: Option<PathBuf>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("config tempdir"),
            scratch: TempDir::new().expect("scratch tempdir"),
            docker: None,
        }
    }

    /// Path inside the config directory
    pub fn config_path(&self, relative: &str) -> PathBuf {
        self.config_dir.path().join(relative)
    }

    /// Path inside the scratch directory
    pub fn scratch_path(&self, relative: &str) -> PathBuf {
        self.scratch.path().join(relative)
    }

    pub fn write_config_file(&self, relative: &str, content: &str) {
        let path = self.config_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_config_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.config_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Install a fake docker that appends each invocation's arguments to
    /// `docker.log` and exits non-zero for `inspect` (no containers exist).
    #[cfg(unix)]
    pub fn with_fake_docker(mut self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let log = self.scratch_path("docker.log");
        let script = self.scratch_path("docker");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\ncase \"$1\" in\n  inspect) exit 1 ;;\nesac\nexit 0\n",
                log.display()
            ),
        )
        .expect("write fake docker");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake docker");
        self.docker = Some(script);
        self
    }

    /// Lines logged by the fake docker
    pub fn docker_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.scratch_path("docker.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run dv in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run dv with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &Path)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dv"));
        cmd.args(args)
            .env("DV_CONFIG_DIR", self.config_dir.path())
            .env_remove("DV_DOCKERFILE")
            .env_remove("DV_DOCKERFILE_THEME")
            .env_remove("DV_LOG");
        match &self.docker {
            Some(docker) => cmd.env("DV_DOCKER", docker),
            None => cmd.env("DV_DOCKER", self.scratch_path("no-docker-here")),
        };
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        output_to_result(cmd.output().expect("Failed to execute dv"))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
