//! Compiled-in default assets
//!
//! The Dockerfiles shipped with dv, embedded so the binary can materialize
//! them into the config directory.

use std::sync::OnceLock;

use crate::domain::entities::{AssetDescriptor, AssetKind};

const DOCKERFILE: &[u8] = include_bytes!("files/Dockerfile");
const DOCKERFILE_THEME: &[u8] = include_bytes!("files/Dockerfile.theme");

/// Descriptor for the embedded default of `kind`.
pub fn embedded(kind: AssetKind) -> &'static AssetDescriptor {
    static PRIMARY: OnceLock<AssetDescriptor> = OnceLock::new();
    static THEME: OnceLock<AssetDescriptor> = OnceLock::new();
    match kind {
        AssetKind::Dockerfile => {
            PRIMARY.get_or_init(|| AssetDescriptor::new(AssetKind::Dockerfile, DOCKERFILE))
        }
        AssetKind::DockerfileTheme => THEME
            .get_or_init(|| AssetDescriptor::new(AssetKind::DockerfileTheme, DOCKERFILE_THEME)),
    }
}
