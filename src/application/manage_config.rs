//! Config management use case

use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "namespace" => Ok(config.namespace.clone()),
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodjourError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: namespace, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "namespace" => {
                Config::validate_namespace(value)?;
                config.namespace = value.to_string();
            }
            "export_dir" => {
                config.export_dir = PathBuf::from(value);
            }
            "created" => {
                return Err(MoodjourError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodjourError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: namespace, export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_and_set_namespace() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("namespace").unwrap(), "moodTracker");
        service.set("namespace", "work").unwrap();
        assert_eq!(service.get("namespace").unwrap(), "work");
    }

    #[test]
    fn test_set_invalid_namespace() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("namespace", "a/b").is_err());
        assert_eq!(service.get("namespace").unwrap(), "moodTracker");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        match service.get("editor") {
            Err(MoodjourError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
