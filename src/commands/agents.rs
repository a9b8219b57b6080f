use anyhow::Result;

use super::CommandContext;
use crate::application::images;
use crate::infrastructure::DockerCli;
use crate::presentation::emit_json;

pub fn cmd_agents(ctx: &CommandContext, prefix: &str) -> Result<()> {
    let names = images::agent_names(&DockerCli::new(), &ctx.config, prefix)?;

    if ctx.json {
        return emit_json(serde_json::json!({
            "event": "agents",
            "image": ctx.config.selected_image,
            "agents": names,
        }));
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
