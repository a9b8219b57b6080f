use anyhow::Result;

use super::CommandContext;
use crate::config::config_path;
use crate::presentation::{emit_json, ConfigAction};

pub fn cmd_config(ctx: &CommandContext, action: ConfigAction) -> Result<()> {
    let path = config_path(&ctx.config_dir);
    match action {
        ConfigAction::Path if ctx.json => emit_json(serde_json::json!({ "path": path })),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Show if ctx.json => {
            let value = serde_json::to_value(&ctx.config)?;
            emit_json(value)
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&ctx.config)?);
            Ok(())
        }
    }
}
