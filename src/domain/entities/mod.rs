//! Domain Entities
//!
//! - `AssetDescriptor` - An embedded default file and its digest
//! - `ContainerSummary` / `RunSpec` - Containers as reported to and requested from the runtime

mod asset;
mod container;

pub use asset::{AssetDescriptor, AssetKind, Resolution};
pub use container::{
    parse_labels, ContainerState, ContainerSummary, RunSpec, LABEL_IMAGE_NAME, LABEL_IMAGE_TAG,
    LABEL_OWNER, OWNER_VALUE, PORT_ENV_VAR,
};
