//! Output helpers shared by commands

use std::io::Write;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const DV_LOG_VAR: &str = "DV_LOG";

/// Print one JSON document on its own line.
pub fn emit_json(value: serde_json::Value) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &value)?;
    writeln!(stdout)?;
    Ok(())
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber.
///
/// `DV_LOG` wins when set; otherwise `-v` flags pick the level.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(DV_LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("dv={}", default_level(verbose))));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
