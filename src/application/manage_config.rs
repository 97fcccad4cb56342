//! Config management use case

use crate::error::{AmityError, Result};
use crate::infrastructure::{CollectionStore, Config, FileStore};

/// Service for managing tracker configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "row_height" => Ok(config.row_height.to_string()),
            "recent_days" => Ok(config.recent_days.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(AmityError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: row_height, recent_days, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "row_height" => {
                let height: u32 = value.parse().map_err(|_| {
                    AmityError::Config(format!("Invalid row_height: '{}'", value))
                })?;
                if height == 0 {
                    return Err(AmityError::Config(
                        "row_height must be at least 1".to_string(),
                    ));
                }
                config.row_height = height;
            }
            "recent_days" => {
                let days: i64 = value.parse().map_err(|_| {
                    AmityError::Config(format!("Invalid recent_days: '{}'", value))
                })?;
                if days < 0 {
                    return Err(AmityError::Config(
                        "recent_days cannot be negative".to_string(),
                    ));
                }
                config.recent_days = days;
            }
            "created" => {
                return Err(AmityError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(AmityError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: row_height, recent_days",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
