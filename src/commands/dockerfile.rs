use anyhow::{Context, Result};

use super::CommandContext;
use crate::application::{assets, images};
use crate::domain::entities::AssetKind;
use crate::infrastructure::DockerCli;
use crate::presentation::emit_json;

pub fn cmd_dockerfile(ctx: &CommandContext, theme: bool) -> Result<()> {
    let kind = if theme {
        AssetKind::DockerfileTheme
    } else {
        AssetKind::Dockerfile
    };
    let resolution = assets::resolve(kind, &ctx.config_dir)?;

    if ctx.json {
        return emit_json(serde_json::json!({
            "event": "dockerfile",
            "asset": kind.file_name(),
            "path": resolution.effective_path,
            "context": resolution.context_dir,
            "override": resolution.used_override,
        }));
    }

    println!("Dockerfile: {}", resolution.effective_path.display());
    println!("Context:    {}", resolution.context_dir.display());
    if resolution.used_override {
        println!("(override in use)");
    }
    Ok(())
}

pub fn cmd_build(ctx: &CommandContext, image: Option<String>) -> Result<()> {
    let runtime = DockerCli::new();
    let (tag, resolution) =
        images::build_image(&runtime, &ctx.config, &ctx.config_dir, image.as_deref())
            .context("building image")?;

    if ctx.json {
        return emit_json(serde_json::json!({
            "event": "build",
            "tag": tag,
            "dockerfile": resolution.effective_path,
        }));
    }
    println!(
        "Built {} from {}",
        tag,
        resolution.effective_path.display()
    );
    Ok(())
}
