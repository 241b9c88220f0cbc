//! Infrastructure layer - Persistence and workspace I/O

pub mod config;
pub mod repository;
pub mod storage;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{StorageAdapter, StorageKey, DEFAULT_NAMESPACE};
pub use store::{FileStore, KeyValueStore, MemoryStore};
