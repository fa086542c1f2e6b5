//! Error types for sitelog

use thiserror::Error;

/// Main error type for the sitelog application
#[derive(Debug, Error)]
pub enum SitelogError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SitelogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SitelogError::InvalidDate(_) => 2,
            SitelogError::InvalidMonth(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SitelogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format.\n\n\
                    Examples:\n\
                    sitelog due 2025-09-12\n\
                    sitelog due 2025-09-12 --today 2025-08-30",
                    input
                )
            }
            SitelogError::InvalidMonth(month) => {
                format!(
                    "Invalid month: {}\n\n\
                    Months are numbered 1 (January) through 12 (December).\n\
                    Example: sitelog cal 2025 8",
                    month
                )
            }
            SitelogError::Config(msg) => {
                if msg.contains("Unknown key") {
                    format!(
                        "{}\n\n\
                        Valid keys: default_lunch_minutes\n\
                        Example: sitelog config default_lunch_minutes 30",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SitelogError
pub type Result<T> = std::result::Result<T, SitelogError>;
