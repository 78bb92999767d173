//! Configuration file loading for the terminal front end.
//!
//! Settings come from `play.toml` in the current directory unless another
//! path is given. A missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A game needs room for at least one move.
    #[error("max_plies must be at least 1")]
    ZeroPlyLimit,
}

/// Front-end settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Identifier sent in score records. Defaults to "local-player".
    #[serde(default = "default_player_id")]
    pub player_id: String,
    /// Games are cut off as draws after this many half-moves. Defaults to 500.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Directory game reports are written into. Defaults to "data/games".
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// Seed for the bots; unset means a fresh seed every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_player_id() -> String {
    "local-player".to_string()
}

fn default_max_plies() -> usize {
    500
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("data/games")
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            player_id: default_player_id(),
            max_plies: default_max_plies(),
            report_dir: default_report_dir(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, and
    /// [`ConfigError::ZeroPlyLimit`] if `max_plies` is 0.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)?
        } else {
            Self::default()
        };
        Ok(config)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        if config.max_plies == 0 {
            return Err(ConfigError::ZeroPlyLimit);
        }
        Ok(config)
    }

    /// The default configuration path, `play.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("play.toml")
    }
}
