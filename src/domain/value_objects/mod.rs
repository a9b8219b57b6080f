//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;

pub use hash::{digest, ContentHash};
