//! Configuration management

use crate::error::{AmityError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_row_height() -> u32 {
    crate::domain::schedule::DEFAULT_ROW_HEIGHT
}

fn default_recent_days() -> i64 {
    7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pixel height of one hour row in the planner day view
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    /// Calendar-day window for "recently contacted"
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            row_height: default_row_height(),
            recent_days: default_recent_days(),
            created: Utc::now(),
        }
    }

    /// Load config from .amity/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".amity").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AmityError::NotAmityDirectory(path.to_path_buf())
            } else {
                AmityError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| AmityError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .amity/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let amity_dir = path.join(".amity");
        let config_path = amity_dir.join("config.toml");

        if !amity_dir.exists() {
            fs::create_dir(&amity_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| AmityError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
