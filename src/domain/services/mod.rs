//! Domain Services
//!
//! Stateless logic over domain entities.

pub mod identity;

pub use identity::{belongs, suggest_agent_names, ImageSelection};
