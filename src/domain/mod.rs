//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Asset descriptors, container records and run specs
//! - `value_objects/` - Immutable value types (ContentHash)
//! - `services/` - Container identity matching
//! - `ports/` - Interface definitions for infrastructure (runtime, port probe)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
