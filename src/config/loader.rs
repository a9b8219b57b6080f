//! Configuration loading and persistence

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DvError, DvResult};
use crate::infrastructure::fs::{write_atomic, MATERIALIZED_MODE};

use super::types::Config;

pub const CONFIG_FILE: &str = "config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            ),
            None => write!(f, "unknown config key '{}' in {}", self.key, self.file.display()),
        }
    }
}

/// Path of the config file inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DvResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DvError::io(path, e))?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> DvResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DvError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// 1-based line of the first `key =` assignment, if any.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content.lines().position(|line| {
        line.trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    })
    .map(|idx| idx + 1)
}

/// Load `<config_dir>/config.toml`, writing the defaults if it is missing.
pub fn load_or_create(config_dir: &Path) -> DvResult<(Config, Vec<ConfigWarning>)> {
    let path = config_path(config_dir);
    match fs::read_to_string(&path) {
        Ok(content) => parse_with_warnings(&content, &path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let config = Config::default();
            save(&config, config_dir)?;
            tracing::info!(path = %path.display(), "wrote default config");
            Ok((config, Vec::new()))
        }
        Err(e) => Err(DvError::io(&path, e)),
    }
}

/// Serialize and atomically write `config` to `<config_dir>/config.toml`.
pub fn save(config: &Config, config_dir: &Path) -> DvResult<()> {
    let path = config_path(config_dir);
    let body = toml::to_string_pretty(config).map_err(|e| DvError::InvalidConfig {
        file: path.clone(),
        message: e.to_string(),
    })?;
    write_atomic(&path, body.as_bytes(), MATERIALIZED_MODE)
}
