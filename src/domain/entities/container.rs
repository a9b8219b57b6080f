//! Container records and creation specs
//!
//! The runtime is the only source of truth for container state; these types
//! describe what it reports and what we ask it to create.

use std::collections::BTreeMap;

/// Label marking containers created by dv
pub const LABEL_OWNER: &str = "com.dv.owner";
/// Label recording the logical image name a container was created from
pub const LABEL_IMAGE_NAME: &str = "com.dv.image-name";
/// Label recording the image tag a container was created from
pub const LABEL_IMAGE_TAG: &str = "com.dv.image-tag";
/// Value of [`LABEL_OWNER`]
pub const OWNER_VALUE: &str = "dv";

/// Environment variable carrying the host port into the container
pub const PORT_ENV_VAR: &str = "DISCOURSE_PORT";

/// Container lifecycle state as seen by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Absent,
    Stopped,
    Running,
}

/// One container as listed by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerSummary {
    pub name: String,
    pub image: String,
    pub labels: BTreeMap<String, String>,
}

/// Everything needed to create and start a container in one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    pub name: String,
    pub workdir: String,
    pub image_tag: String,
    pub host_port: u16,
    pub container_port: u16,
    pub labels: BTreeMap<String, String>,
    pub env: BTreeMap<String, String>,
}

impl RunSpec {
    /// Build the spec for a dv-owned container, stamping ownership labels
    /// and the port environment variable.
    pub fn owned(
        name: &str,
        workdir: &str,
        image_tag: &str,
        image_name: &str,
        host_port: u16,
        container_port: u16,
    ) -> Self {
        let labels = BTreeMap::from([
            (LABEL_OWNER.to_string(), OWNER_VALUE.to_string()),
            (LABEL_IMAGE_NAME.to_string(), image_name.to_string()),
            (LABEL_IMAGE_TAG.to_string(), image_tag.to_string()),
        ]);
        let env = BTreeMap::from([(PORT_ENV_VAR.to_string(), host_port.to_string())]);
        Self {
            name: name.to_string(),
            workdir: workdir.to_string(),
            image_tag: image_tag.to_string(),
            host_port,
            container_port,
            labels,
            env,
        }
    }
}

/// Parse the runtime's `key=value,key=value` label listing.
///
/// Segments without `=` are skipped; values may themselves contain `=`.
pub fn parse_labels(field: &str) -> BTreeMap<String, String> {
    field
        .split(',')
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
