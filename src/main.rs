//! dv CLI - local container manager for Discourse development agents
//!
//! Usage: dv <COMMAND>
//!
//! Commands:
//!   start       Create or start the agent container
//!   stop        Stop the agent container
//!   restart     Restart the container (or `restart discourse` for services)
//!   dockerfile  Show which Dockerfile would be used
//!   build       Build an image from its resolved Dockerfile
//!   agents      List containers belonging to the selected image
//!   config      Inspect dv configuration

use anyhow::Result;
use clap::Parser;

use dv::commands::dispatch;
use dv::presentation::{init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dispatch(cli.command, cli.json)
}
