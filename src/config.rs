//! Game configuration loaded from TOML
//!
//! Every key is optional:
//!
//! ```toml
//! [players]
//! one = "Alice"
//! two = "Bob"
//!
//! [window]
//! width = 480.0
//! height = 600.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub players: PlayersConfig,
    pub window: WindowConfig,
}

/// Display names for the two seats
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: "Player 1".to_string(),
            two: "Player 2".to_string(),
        }
    }
}

/// Initial window size in logical points
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 600.0,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
