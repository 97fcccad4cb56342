//! Error types for amity

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the amity application
#[derive(Debug, Error)]
pub enum AmityError {
    #[error("Not an amity directory: {0}")]
    NotAmityDirectory(PathBuf),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No {collection} entry with id '{id}'")]
    UnknownId { collection: &'static str, id: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AmityError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AmityError::NotAmityDirectory(_) => 2,
            AmityError::InvalidTime(_) | AmityError::InvalidDate(_) => 3,
            AmityError::UnknownId { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AmityError::NotAmityDirectory(path) => {
                format!(
                    "Not an amity directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'amity init' in this directory to create a new tracker\n\
                    • Navigate to an existing amity directory\n\
                    • Set AMITY_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            AmityError::InvalidTime(time_str) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Expected a 12-hour clock time with a minute and meridiem:\n\
                    • 9:00 AM\n\
                    • 12:30 PM\n\
                    • 1:15 PM\n\n\
                    Examples:\n\
                    amity planner add \"Lunch\" --date 2025-01-17 --start \"12:00 PM\" --end \"1:00 PM\"",
                    time_str
                )
            }
            AmityError::InvalidDate(date_str) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: amity planner day 2025-01-17",
                    date_str
                )
            }
            AmityError::UnknownId { collection, id } => {
                format!(
                    "No {} entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'amity {} list' to see ids\n\
                    • Ids are the numeric strings in the first column",
                    collection,
                    id,
                    match *collection {
                        "indicators" => "goals",
                        "events" => "planner",
                        "content" => "feed",
                        other => other,
                    }
                )
            }
            AmityError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using AmityError
pub type Result<T> = std::result::Result<T, AmityError>;
