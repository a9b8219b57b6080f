//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `assets/` - Embedded default Dockerfiles
//! - `fs/` - Atomic writes, materialization, config dir lock
//! - `docker` - ContainerRuntime over the docker CLI
//! - `net` - PortProbe over TCP bind

pub mod assets;
pub mod docker;
pub mod fs;
pub mod net;

pub use docker::DockerCli;
pub use net::TcpPortProbe;
