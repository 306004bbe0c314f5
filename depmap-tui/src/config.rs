//! Optional TOML configuration for the terminal UI.
//!
//! Looked up under `<config dir>/depmap/config.toml`. A missing file means
//! defaults. Nothing here can change the initial expansion state.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::Panel;

const MIN_TICK_MS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
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
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event-poll timeout in milliseconds.
    pub tick_rate_ms: u64,
    pub start_panel: Panel,
    pub show_help_on_start: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            start_panel: Panel::Components,
            show_help_on_start: false,
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_MS))
    }
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("depmap")
        .join("config.toml")
}

/// Load the config at `path`. A missing file yields defaults.
pub fn load(path: &Path) -> Result<TuiConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TuiConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load`], but falls back to defaults and hands back the error.
pub fn load_or_default(path: &Path) -> (TuiConfig, Option<ConfigError>) {
    match load(path) {
        Ok(config) => (config, None),
        Err(e) => (TuiConfig::default(), Some(e)),
    }
}
