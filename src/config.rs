//! Configuration management.
//!
//! Config is stored at ~/.config/termfolio/config.toml. Every field is
//! optional; a missing default file means defaults.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tui::{Tab, TabController};

/// Error loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("tab list is empty")]
    EmptyTabs,

    #[error("tab listed twice: {0:?}")]
    DuplicateTab(Tab),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Portfolio JSON to load instead of the bundled one
    pub data_path: Option<PathBuf>,
    /// Viewer tabs, in order
    pub tabs: Option<Vec<Tab>>,
    pub logging: LoggingConfig,
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
    pub file_enabled: bool,
    pub dir: PathBuf,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file_enabled: false,
            dir: default_log_dir(),
            file_prefix: "termfolio.log".to_string(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("termfolio")
        .join("logs")
}

impl Config {
    /// Get config file path (~/.config/termfolio/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("termfolio").join("config.toml"))
    }

    /// Load config.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Parse a config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.tab_controller()?;
        Ok(config)
    }

    /// Build the viewer's tab controller from the configured tab list.
    pub fn tab_controller(&self) -> Result<TabController, ConfigError> {
        let Some(tabs) = &self.tabs else {
            return Ok(TabController::default());
        };

        let mut seen = BTreeSet::new();
        for tab in tabs {
            if !seen.insert(*tab) {
                return Err(ConfigError::DuplicateTab(*tab));
            }
        }

        TabController::new(tabs.clone()).ok_or(ConfigError::EmptyTabs)
    }
}
