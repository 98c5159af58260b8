//! Configuration loading
//!
//! This module provides:
//! - `RewriterConfig` - the trusted plugin root the rewriter resolves against
//! - `Config` - optional logging settings loaded from config.toml
//!
//! The plugin root only ever comes from the CLI or the environment the host
//! sets up. It is never read from the config file or guessed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names;

/// Location of the sandbox binary relative to the plugin root
const SANDBOX_BIN_DIR: &str = "bin";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Injected configuration for the rewriter.
///
/// # Example
///
/// ```
/// use spectator_hook::RewriterConfig;
///
/// let config = RewriterConfig::new(Some("/plugin"));
/// assert_eq!(config.sandbox_bin().as_deref(), Some("/plugin/bin/sandbox-run"));
///
/// assert_eq!(RewriterConfig::new(Some("")).sandbox_bin(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriterConfig {
    pub plugin_root: Option<PathBuf>,
}

impl RewriterConfig {
    /// Build from a raw root value; an empty string counts as unset
    pub fn new(plugin_root: Option<&str>) -> Self {
        Self {
            plugin_root: plugin_root.filter(|root| !root.is_empty()).map(PathBuf::from),
        }
    }

    /// Read the root from `CLAUDE_PLUGIN_ROOT`
    pub fn from_env() -> Self {
        Self::new(std::env::var(names::PLUGIN_ROOT_ENV).ok().as_deref())
    }

    /// Canonical sandbox executable, `<root>/bin/sandbox-run`
    pub fn sandbox_bin(&self) -> Option<String> {
        let root = self.plugin_root.as_deref()?;
        let bin = root.join(SANDBOX_BIN_DIR).join(names::SANDBOX_COMMAND);
        Some(bin.to_string_lossy().into_owned())
    }
}

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the config directory path (~/.config/spectator)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("spectator"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }
}

/// File logging settings; logging is disabled unless `file` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. "debug" or "spectator_hook=trace"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "debug".to_string(),
        }
    }
}

impl LogConfig {
    /// Layer CLI/env values over the file values
    pub fn merge(mut self, file: Option<PathBuf>, level: Option<String>) -> Self {
        if let Some(file) = file {
            self.file = Some(file);
        }
        if let Some(level) = level {
            self.level = level;
        }
        self
    }
}
