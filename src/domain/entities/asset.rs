//! Embeddable asset entities
//!
//! An asset kind is a family of config files (the primary Dockerfile, the
//! theme Dockerfile) that share the same override and refresh rules but
//! carry their own embedded default and override variable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ContentHash;

/// Which embedded asset family a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetKind {
    #[default]
    #[serde(rename = "Dockerfile")]
    Dockerfile,
    #[serde(rename = "Dockerfile.theme")]
    DockerfileTheme,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Dockerfile, AssetKind::DockerfileTheme];

    /// File name inside the config directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKind::Dockerfile => "Dockerfile",
            AssetKind::DockerfileTheme => "Dockerfile.theme",
        }
    }

    /// Environment variable that may point at an override file.
    pub fn env_var(&self) -> &'static str {
        match self {
            AssetKind::Dockerfile => "DV_DOCKERFILE",
            AssetKind::DockerfileTheme => "DV_DOCKERFILE_THEME",
        }
    }
}

/// Compiled-in default for one asset kind
#[derive(Debug, Clone)]
pub struct AssetDescriptor {
    kind: AssetKind,
    content: &'static [u8],
    digest: ContentHash,
}

impl AssetDescriptor {
    pub fn new(kind: AssetKind, content: &'static [u8]) -> Self {
        Self {
            kind,
            content,
            digest: ContentHash::from_bytes(content),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    pub fn env_var(&self) -> &'static str {
        self.kind.env_var()
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }

    /// `<dir>/<K>`
    pub fn target_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// `<dir>/<K>.sha256`
    pub fn sidecar_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.sha256", self.file_name()))
    }

    /// `<dir>/<K>.local`
    pub fn local_override_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.local", self.file_name()))
    }
}

/// Where an asset resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub effective_path: PathBuf,
    pub context_dir: PathBuf,
    pub used_override: bool,
}
