//! Configuration file support for fleet-dashboard.
//!
//! Provides YAML-based configuration through `fleet-dashboard.config.yml`
//! files, including data structures, file loading, validation, and the
//! merge of file values with command-line overrides into `Settings`.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::shared::error::FleetError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fleet-dashboard.config.yml";

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

const APP_DIR_NAME: &str = "fleet-dashboard";
const SESSION_FILENAME: &str = "session.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub search_debounce_ms: Option<u64>,
    pub session_file: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config file loaded");
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.api_url {
        validate_api_url(url)?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a timeout in seconds, e.g. `timeout_secs: 10`."
        );
    }

    if config.search_debounce_ms == Some(0) {
        bail!(
            "Invalid config: search_debounce_ms must be greater than 0.\n\n\
             💡 Hint: The default debounce interval is {} ms.",
            DEFAULT_SEARCH_DEBOUNCE_MS
        );
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

/// The API base URL must be a non-empty http(s) URL
pub fn validate_api_url(url: &str) -> Result<()> {
    let url = url.trim();
    let message = if url.is_empty() {
        "api_url must not be empty".to_string()
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        format!(
            "api_url '{}' must start with http:// or https:// (e.g. {})",
            url, DEFAULT_API_URL
        )
    } else {
        return Ok(());
    };
    Err(FleetError::Validation { message }.into())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Values given on the command line (or through the environment)
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_url: Option<String>,
    pub session_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub timeout: Duration,
    pub search_debounce: Duration,
    pub session_file: PathBuf,
    pub assets_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Settings {
    /// Merges overrides > config file > defaults
    pub fn resolve(config: Option<ConfigFile>, overrides: SettingsOverrides) -> Result<Self> {
        let config = config.unwrap_or_default();

        let api_url = overrides
            .api_url
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let format = match overrides.format {
            Some(format) => format,
            None => match config.format.as_deref() {
                Some(raw) => OutputFormat::from_str(raw).map_err(anyhow::Error::msg)?,
                None => OutputFormat::default(),
            },
        };

        Ok(Self {
            api_url: api_url.trim().to_string(),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            search_debounce: Duration::from_millis(
                config
                    .search_debounce_ms
                    .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            ),
            session_file: overrides
                .session_file
                .or(config.session_file)
                .unwrap_or_else(default_session_file),
            assets_dir: config.assets_dir,
            format,
        })
    }
}

/// `<user config dir>/fleet-dashboard/session.json`, or the current directory
/// when the platform has no config dir
pub fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SESSION_FILENAME)
}
