//! In-memory container runtime for tests
//!
//! Records every mutating call so tests can assert on exactly what the
//! orchestrator asked the runtime to do.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ContainerSummary, RunSpec};
use crate::domain::ports::ContainerRuntime;
use crate::error::{DvError, DvResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeContainer {
    pub spec: Option<RunSpec>,
    pub image: String,
    pub running: bool,
}

#[derive(Debug, Default)]
struct State {
    containers: BTreeMap<String, FakeContainer>,
    calls: Vec<String>,
    fail_on: Option<String>,
    exec_failures: Vec<usize>,
    execs: usize,
}

/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Clone, Default)]
pub struct FakeRuntime {
    state: Arc<Mutex<State>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(self, name: &str, image: &str, running: bool) -> Self {
        self.state.lock().unwrap().containers.insert(
            name.to_string(),
            FakeContainer {
                spec: None,
                image: image.to_string(),
                running,
            },
        );
        self
    }

    /// Make the named primitive (`start`, `stop`, `remove`, `run`, `exec`) fail.
    pub fn failing(self, primitive: &str) -> Self {
        self.state.lock().unwrap().fail_on = Some(primitive.to_string());
        self
    }

    /// Make the n-th (0-based) exec call fail.
    pub fn failing_exec_at(self, index: usize) -> Self {
        self.state.lock().unwrap().exec_failures.push(index);
        self
    }

    pub fn container(&self, name: &str) -> Option<FakeContainer> {
        self.state.lock().unwrap().containers.get(name).cloned()
    }

    pub fn container_count(&self) -> usize {
        self.state.lock().unwrap().containers.len()
    }

    /// Mutating calls, e.g. `"run ai_agent"`, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, primitive: &str, detail: &str) -> DvResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{primitive} {detail}"));
        if state.fail_on.as_deref() == Some(primitive) {
            return Err(DvError::Runtime {
                command: format!("docker {primitive} {detail}"),
                message: "simulated failure".to_string(),
            });
        }
        Ok(())
    }

    fn no_such(name: &str) -> DvError {
        DvError::Runtime {
            command: format!("docker start {name}"),
            message: format!("No such container: {name}"),
        }
    }
}

impl ContainerRuntime for FakeRuntime {
    fn exists(&self, name: &str) -> DvResult<bool> {
        Ok(self.state.lock().unwrap().containers.contains_key(name))
    }

    fn running(&self, name: &str) -> DvResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .containers
            .get(name)
            .is_some_and(|c| c.running))
    }

    fn start(&self, name: &str) -> DvResult<()> {
        self.record("start", name)?;
        let mut state = self.state.lock().unwrap();
        let container = state.containers.get_mut(name).ok_or_else(|| Self::no_such(name))?;
        container.running = true;
        Ok(())
    }

    fn stop(&self, name: &str) -> DvResult<()> {
        self.record("stop", name)?;
        let mut state = self.state.lock().unwrap();
        let container = state.containers.get_mut(name).ok_or_else(|| Self::no_such(name))?;
        container.running = false;
        Ok(())
    }

    fn remove(&self, name: &str) -> DvResult<()> {
        self.record("remove", name)?;
        let mut state = self.state.lock().unwrap();
        match state.containers.get(name) {
            Some(c) if c.running => Err(DvError::Runtime {
                command: format!("docker rm {name}"),
                message: "cannot remove a running container".to_string(),
            }),
            Some(_) => {
                state.containers.remove(name);
                Ok(())
            }
            None => Err(Self::no_such(name)),
        }
    }

    fn run_detached(&self, spec: &RunSpec) -> DvResult<()> {
        self.record("run", &spec.name)?;
        let mut state = self.state.lock().unwrap();
        if state.containers.contains_key(&spec.name) {
            return Err(DvError::Runtime {
                command: format!("docker run --name {}", spec.name),
                message: "container name already in use".to_string(),
            });
        }
        state.containers.insert(
            spec.name.clone(),
            FakeContainer {
                spec: Some(spec.clone()),
                image: spec.image_tag.clone(),
                running: true,
            },
        );
        Ok(())
    }

    fn exec_as_root(&self, name: &str, _workdir: &str, argv: &[String]) -> DvResult<String> {
        self.record("exec", name)?;
        let mut state = self.state.lock().unwrap();
        let index = state.execs;
        state.execs += 1;
        if state.exec_failures.contains(&index) {
            return Err(DvError::Runtime {
                command: format!("docker exec {name}"),
                message: "exit status 1".to_string(),
            });
        }
        Ok(format!("ran: {}\n", argv.last().map(String::as_str).unwrap_or("")))
    }

    fn list_containers(&self) -> DvResult<Vec<ContainerSummary>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .containers
            .iter()
            .map(|(name, c)| ContainerSummary {
                name: name.clone(),
                image: c.image.clone(),
                labels: c.spec.as_ref().map(|s| s.labels.clone()).unwrap_or_default(),
            })
            .collect())
    }

    fn build(&self, tag: &str, _dockerfile: &Path, _context: &Path) -> DvResult<()> {
        self.record("build", tag)
    }
}
