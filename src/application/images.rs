//! Image-level operations: building an image and finding its containers

use std::path::Path;

use crate::application::assets;
use crate::config::Config;
use crate::domain::entities::Resolution;
use crate::domain::ports::ContainerRuntime;
use crate::domain::services::suggest_agent_names;
use crate::error::DvResult;

/// Resolve the Dockerfile for `image` (or the selected image) and build it.
pub fn build_image<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    config: &Config,
    config_dir: &Path,
    image: Option<&str>,
) -> DvResult<(String, Resolution)> {
    let (_, image) = config.resolve_image(image)?;
    let resolution = assets::resolve(image.dockerfile, config_dir)?;
    runtime.build(&image.tag, &resolution.effective_path, &resolution.context_dir)?;
    Ok((image.tag.clone(), resolution))
}

/// Containers the runtime knows about that belong to the selected image.
pub fn agent_names<R: ContainerRuntime + ?Sized>(
    runtime: &R,
    config: &Config,
    prefix: &str,
) -> DvResult<Vec<String>> {
    let selection = config.selection()?;
    let containers = runtime.list_containers()?;
    Ok(suggest_agent_names(
        &containers,
        selection,
        &config.container_images,
        prefix,
    ))
}
