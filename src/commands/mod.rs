//! Command handlers
//!
//! Each handler loads what it needs, calls into the application layer and
//! prints a human (or `--json`) summary.

mod agents;
mod config;
mod dockerfile;
mod lifecycle;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::infrastructure::fs::dv_config_dir;
use crate::presentation::{Commands, RestartTarget};

/// State shared by all commands
pub struct CommandContext {
    pub config_dir: PathBuf,
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    /// Locate the config dir and load (or create) the config.
    pub fn load(json: bool) -> Result<Self> {
        let config_dir =
            dv_config_dir().context("could not determine a config directory; set DV_CONFIG_DIR")?;
        let (config, warnings) = Config::load_or_create(&config_dir)
            .with_context(|| format!("loading config from {}", config_dir.display()))?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        Ok(Self {
            config_dir,
            config,
            json,
        })
    }

    /// `--name` if given, else the selected or default container.
    pub fn container_name(&self, name: Option<String>) -> String {
        name.filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.config.current_agent_name().to_string())
    }
}

/// Run the parsed command.
pub fn dispatch(command: Commands, json: bool) -> Result<()> {
    let mut ctx = CommandContext::load(json)?;
    match command {
        Commands::Start {
            name,
            image,
            reset,
            new,
        } => lifecycle::cmd_start(&mut ctx, name, image, reset, new),
        Commands::Stop { name } => lifecycle::cmd_stop(&ctx, name),
        Commands::Restart { name, target } => match target {
            Some(RestartTarget::Discourse { name: inner }) => {
                lifecycle::cmd_restart_discourse(&ctx, inner.or(name))
            }
            None => lifecycle::cmd_restart(&ctx, name),
        },
        Commands::Dockerfile { theme } => dockerfile::cmd_dockerfile(&ctx, theme),
        Commands::Build { image } => dockerfile::cmd_build(&ctx, image),
        Commands::Agents { prefix } => agents::cmd_agents(&ctx, &prefix),
        Commands::Config { action } => config::cmd_config(&ctx, action),
    }
}
