//! Config management use case

use crate::error::{Result, SitelogError};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing sitelog configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a config service rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_or_default(&self.root)?;

        match key {
            "default_lunch_minutes" => Ok(config.default_lunch_minutes.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SitelogError::Config(format!(
                "Unknown key: '{}'. Valid keys are: default_lunch_minutes, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_or_default(&self.root)?;

        match key {
            "default_lunch_minutes" => {
                let minutes: i64 = value.parse().map_err(|_| {
                    SitelogError::Config(format!(
                        "default_lunch_minutes must be a whole number of minutes, got '{}'",
                        value
                    ))
                })?;
                if minutes < 0 {
                    return Err(SitelogError::Config(
                        "default_lunch_minutes cannot be negative".to_string(),
                    ));
                }
                config.default_lunch_minutes = minutes;
            }
            "created" => {
                return Err(SitelogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SitelogError::Config(format!(
                    "Unknown key: '{}'. Valid keys are: default_lunch_minutes",
                    key
                )));
            }
        }

        config.save_to_dir(&self.root)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_or_default(&self.root)
    }
}
