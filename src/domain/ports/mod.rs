//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod container_runtime;
pub mod port_probe;

pub use container_runtime::ContainerRuntime;
pub use port_probe::PortProbe;
