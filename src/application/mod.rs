//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod reminders;
pub mod transfer;

pub use journal::JournalService;
pub use manage_config::ConfigService;
pub use reminders::ReminderService;
pub use transfer::{
    export_snapshot, find_latest_backup, import_file, import_snapshot, ExportDocument,
    ImportedSnapshot,
};
