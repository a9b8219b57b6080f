//! Configuration module for dv
//!
//! A single TOML file in the dv config directory holds the image catalog,
//! the current selection, port settings and the container→image mapping.
//! Missing keys fall back to built-in defaults; unknown keys are warnings.

mod loader;
mod types;

pub use loader::{config_path, ConfigWarning, CONFIG_FILE};
pub use types::{Config, ImageConfig};
