//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::AssetKind;
use crate::domain::services::ImageSelection;
use crate::error::{DvError, DvResult};

use super::loader::{self, ConfigWarning};

/// One logical image: how to build it and where it works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub tag: String,

    #[serde(default = "default_workdir")]
    pub workdir: String,

    /// Which embedded Dockerfile family builds this image
    #[serde(default)]
    pub dockerfile: AssetKind,
}

fn default_workdir() -> String {
    "/var/www/discourse".to_string()
}

/// dv configuration (`<config dir>/config.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_selected_image")]
    pub selected_image: String,

    /// Current agent (set by `dv start --new`); empty means `default_container`
    #[serde(default)]
    pub selected_agent: String,

    #[serde(default = "default_container")]
    pub default_container: String,

    #[serde(default = "default_host_starting_port")]
    pub host_starting_port: u16,

    #[serde(default = "default_container_port")]
    pub container_port: u16,

    #[serde(default = "default_images")]
    pub images: BTreeMap<String, ImageConfig>,

    /// Container name -> image name, recorded when a container is started
    /// for a specific image
    #[serde(default)]
    pub container_images: BTreeMap<String, String>,
}

fn default_selected_image() -> String {
    "discourse".to_string()
}

fn default_container() -> String {
    "ai_agent".to_string()
}

fn default_host_starting_port() -> u16 {
    4201
}

fn default_container_port() -> u16 {
    4200
}

fn default_images() -> BTreeMap<String, ImageConfig> {
    BTreeMap::from([
        (
            "discourse".to_string(),
            ImageConfig {
                tag: "ai_agent".to_string(),
                workdir: default_workdir(),
                dockerfile: AssetKind::Dockerfile,
            },
        ),
        (
            "theme".to_string(),
            ImageConfig {
                tag: "ai_agent_theme".to_string(),
                workdir: default_workdir(),
                dockerfile: AssetKind::DockerfileTheme,
            },
        ),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selected_image: default_selected_image(),
            selected_agent: String::new(),
            default_container: default_container(),
            host_starting_port: default_host_starting_port(),
            container_port: default_container_port(),
            images: default_images(),
            container_images: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DvResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DvResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<config_dir>/config.toml`, writing defaults first if missing.
    pub fn load_or_create(config_dir: &Path) -> DvResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_create(config_dir)
    }

    /// Persist to `<config_dir>/config.toml`.
    pub fn save(&self, config_dir: &Path) -> DvResult<()> {
        loader::save(self, config_dir)
    }

    /// Container to act on when no name is given.
    pub fn current_agent_name(&self) -> &str {
        if self.selected_agent.is_empty() {
            &self.default_container
        } else {
            &self.selected_agent
        }
    }

    /// The named image, or the selected one when `name` is `None` or empty.
    pub fn resolve_image<'a>(&'a self, name: Option<&'a str>) -> DvResult<(&'a str, &'a ImageConfig)> {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(self.selected_image.as_str());
        self.images
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| DvError::UnknownImage {
                name: name.to_string(),
            })
    }

    /// Image a container was created from: its recorded mapping, else the
    /// selected image.
    pub fn image_for_container(&self, container: &str) -> DvResult<(&str, &ImageConfig)> {
        let recorded = self.container_images.get(container).map(String::as_str);
        self.resolve_image(recorded)
    }

    /// Selected image as identity-matcher input.
    pub fn selection(&self) -> DvResult<ImageSelection<'_>> {
        let (name, image) = self.resolve_image(None)?;
        Ok(ImageSelection {
            name,
            tag: &image.tag,
        })
    }
}
