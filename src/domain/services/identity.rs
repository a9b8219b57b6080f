//! Container identity matching
//!
//! Decides whether an existing container is an instance of the currently
//! selected logical image. Evidence is checked strongest first:
//!
//! 1. recorded name→image mapping
//! 2. dv ownership labels
//! 3. image tag

use std::collections::BTreeMap;

use crate::domain::entities::{ContainerSummary, LABEL_IMAGE_NAME, LABEL_OWNER, OWNER_VALUE};

/// The logical image the user currently has selected
#[derive(Debug, Clone, Copy)]
pub struct ImageSelection<'a> {
    pub name: &'a str,
    pub tag: &'a str,
}

/// Whether `container` was produced by `selection`.
pub fn belongs(
    container: &ContainerSummary,
    selection: ImageSelection<'_>,
    mapping: &BTreeMap<String, String>,
) -> bool {
    if mapping
        .get(&container.name)
        .is_some_and(|image| image == selection.name)
    {
        return true;
    }

    let label = |key: &str| container.labels.get(key).map(String::as_str);
    if label(LABEL_OWNER) == Some(OWNER_VALUE) && label(LABEL_IMAGE_NAME) == Some(selection.name) {
        return true;
    }

    container.image == selection.tag
}

/// Names of containers belonging to `selection` whose name starts with
/// `prefix` (case-insensitive). Runtime order is preserved.
pub fn suggest_agent_names(
    containers: &[ContainerSummary],
    selection: ImageSelection<'_>,
    mapping: &BTreeMap<String, String>,
    prefix: &str,
) -> Vec<String> {
    let prefix = prefix.trim().to_lowercase();
    containers
        .iter()
        .filter(|c| belongs(c, selection, mapping))
        .filter(|c| prefix.is_empty() || c.name.to_lowercase().starts_with(&prefix))
        .map(|c| c.name.clone())
        .collect()
}
