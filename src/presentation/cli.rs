//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use clap::{Parser, Subcommand};

/// dv - manage a local Discourse development agent container
#[derive(Parser, Debug)]
#[command(name = "dv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or start the agent container
    Start {
        /// Container name (defaults to selected or default)
        #[arg(long)]
        name: Option<String>,

        /// Image to create the container from (records the mapping)
        #[arg(long)]
        image: Option<String>,

        /// Remove and recreate the container
        #[arg(long)]
        reset: bool,

        /// Create a fresh container with a generated name
        #[arg(long, conflicts_with = "name")]
        new: bool,
    },

    /// Stop the agent container
    Stop {
        /// Container name (defaults to selected or default)
        #[arg(long)]
        name: Option<String>,
    },

    /// Restart the container
    Restart {
        /// Container name (defaults to selected or default)
        #[arg(long)]
        name: Option<String>,

        #[command(subcommand)]
        target: Option<RestartTarget>,
    },

    /// Show which Dockerfile would be used
    Dockerfile {
        /// Resolve the theme Dockerfile instead of the primary one
        #[arg(long)]
        theme: bool,
    },

    /// Build an image from its resolved Dockerfile
    Build {
        /// Image name (defaults to the selected image)
        #[arg(long)]
        image: Option<String>,
    },

    /// List containers belonging to the selected image
    Agents {
        /// Only names starting with this prefix
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Inspect dv configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RestartTarget {
    /// Smart restart of Discourse services inside the container
    Discourse {
        /// Container name (defaults to selected or default)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}
