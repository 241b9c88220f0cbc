//! Configuration management

use crate::error::{MoodjourError, Result};
use crate::infrastructure::storage::DEFAULT_NAMESPACE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const WORKSPACE_DIR: &str = ".moodjour";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for every storage key
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Directory backups are written to, relative to the journal root
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    pub created: DateTime<Utc>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            namespace: default_namespace(),
            export_dir: default_export_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::NotMoodjourDirectory(path.to_path_buf())
            } else {
                MoodjourError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjourError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(workspace_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Get the storage namespace, checking the environment first.
    /// An override that is not a valid namespace is ignored.
    pub fn get_namespace(&self) -> String {
        match std::env::var("MOODJOUR_NAMESPACE") {
            Ok(ns) if !ns.trim().is_empty() => match Self::validate_namespace(&ns) {
                Ok(()) => ns,
                Err(e) => {
                    warn!(error = %e, "ignoring MOODJOUR_NAMESPACE");
                    self.namespace.clone()
                }
            },
            _ => self.namespace.clone(),
        }
    }

    /// Validate a namespace value before storing it
    pub fn validate_namespace(value: &str) -> Result<()> {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(MoodjourError::Config(format!(
                "Invalid namespace: '{}'. Use letters, digits, '_' or '-'",
                value
            )))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
