//! Configuration management

use crate::error::{Result, SitelogError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_created() -> DateTime<Utc> {
    Utc::now()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Lunch deduction applied when a timesheet entry does not specify one
    #[serde(default)]
    pub default_lunch_minutes: i64,
    #[serde(default = "default_created")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_lunch_minutes: 0,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .sitelog/config.toml in the given directory.
    /// A missing file yields the defaults; site crews should not need an
    /// init step before the read-only commands work.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let config_path = path.join(".sitelog").join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(SitelogError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| SitelogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .sitelog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let sitelog_dir = path.join(".sitelog");
        let config_path = sitelog_dir.join("config.toml");

        if !sitelog_dir.exists() {
            fs::create_dir(&sitelog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SitelogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
