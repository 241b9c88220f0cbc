//! Journal workspace on the file system

use crate::error::{MoodjourError, Result};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use crate::infrastructure::storage::StorageAdapter;
use crate::infrastructure::store::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_DIR: &str = "store";

/// Abstract workspace holding configuration and persisted data
pub trait JournalRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .moodjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodjour directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodjour directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root.
    /// First checks MOODJOUR_ROOT environment variable, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodjourError::Config(format!(
                    "MOODJOUR_ROOT is set to '{}' but no .moodjour directory found. \
                    Run 'moodjour init' in that directory or unset MOODJOUR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodjourError::NotMoodjourDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Directory holding the persisted JSON blobs
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join(STORE_DIR)
    }

    /// Storage adapter over this workspace's store, namespaced per `config`.
    ///
    /// A missing store directory is recreated; if that fails the adapter
    /// simply reports itself unavailable.
    pub fn open_storage(&self, config: &Config) -> StorageAdapter<FileStore> {
        let dir = self.store_dir();
        if !dir.is_dir() {
            if let Err(e) = fs::create_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot create store directory");
            }
        }
        StorageAdapter::with_namespace(FileStore::new(dir), config.get_namespace())
    }

    /// Directory backups are written to
    pub fn export_dir(&self, config: &Config) -> PathBuf {
        if config.export_dir.is_absolute() {
            config.export_dir.clone()
        } else {
            self.root.join(&config.export_dir)
        }
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(MoodjourError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        fs::create_dir(self.store_dir())?;
        Ok(())
    }
}
