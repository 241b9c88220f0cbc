//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotMoodjourDirectory(PathBuf),

    #[error("Invalid mood type: {0}")]
    InvalidMoodType(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotMoodjourDirectory(_) => 2,
            MoodjourError::InvalidMoodType(_)
            | MoodjourError::InvalidDate(_)
            | MoodjourError::InvalidInput(_) => 3,
            MoodjourError::EntryNotFound(_) => 4,
            MoodjourError::InvalidImport(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotMoodjourDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to start a journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::InvalidMoodType(value) => {
                format!(
                    "Invalid mood type: '{}'\n\n\
                    Valid moods: excellent, good, neutral, bad, terrible\n\
                    Example: moodjour mood good \"slept well\"",
                    value
                )
            }
            MoodjourError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected formats:\n\
                    • Days: DD-MM-YYYY (e.g., 17-01-2025)\n\
                    • Months: MM-YYYY (e.g., 01-2025)",
                    value
                )
            }
            MoodjourError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'moodjour history' to see mood ids\n\
                    • Use 'moodjour note list' to see note ids",
                    id
                )
            }
            MoodjourError::InvalidImport(reason) => {
                format!(
                    "Invalid import file: {}\n\n\
                    A backup must contain \"version\", \"moods\" and \"notes\" fields.\n\
                    Create one with: moodjour export",
                    reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
