//! Configuration for grc-console.
//!
//! The API base URL resolves in order: `--api-url` flag, the
//! `GRC_API_URL` environment variable, a `grc-console.config.yml` file in
//! the working directory, then the default. The session file location can
//! only come from the config file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

const CONFIG_FILENAME: &str = "grc-console.config.yml";
const ENV_BASE_URL: &str = "GRC_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const SESSION_FILENAME: &str = "session.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub session_file: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub session_file: PathBuf,
}

/// Resolves settings from flag, environment, and an optionally present
/// config file in `dir`.
pub fn load_settings(dir: &Path, cli_base_url: Option<String>) -> Result<Settings> {
    let config = discover_config(dir)?.unwrap_or_default();
    Ok(resolve(
        cli_base_url,
        std::env::var(ENV_BASE_URL).ok(),
        config,
    ))
}

fn resolve(cli_base_url: Option<String>, env_base_url: Option<String>, config: ConfigFile) -> Settings {
    let base_url = cli_base_url
        .or(env_base_url)
        .or(config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let session_file = config
        .session_file
        .unwrap_or_else(default_session_path);

    Settings {
        base_url,
        session_file,
    }
}

fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".grc-console").join(SESSION_FILENAME),
        None => PathBuf::from(SESSION_FILENAME),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
