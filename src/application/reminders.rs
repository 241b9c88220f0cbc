//! Reminder interval settings

use crate::domain::{ReminderSettings, Settings};
use crate::infrastructure::{KeyValueStore, StorageAdapter, StorageKey};
use chrono::{DateTime, Utc};
use tracing::info;

/// Reads and writes the reminder part of the settings blob
pub struct ReminderService<'a, S> {
    storage: &'a StorageAdapter<S>,
}

impl<'a, S: KeyValueStore> ReminderService<'a, S> {
    pub fn new(storage: &'a StorageAdapter<S>) -> Self {
        ReminderService { storage }
    }

    /// Stored reminder settings, or disabled when none are stored
    pub fn load_settings(&self) -> ReminderSettings {
        self.load_all().reminder_or_default()
    }

    /// Remind every `hours` hours starting from `now`; 0 disables.
    /// Returns whether the settings were persisted.
    pub fn setup(&self, hours: u32, now: DateTime<Utc>) -> bool {
        if hours == 0 {
            return self.disable();
        }
        info!(hours, "reminder configured");
        self.save(ReminderSettings::every(hours, now))
    }

    pub fn disable(&self) -> bool {
        info!("reminder disabled");
        self.save(ReminderSettings::disabled())
    }

    /// Next time a reminder is due, if reminders are on
    pub fn next_due(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.load_settings().next_due(now)
    }

    fn load_all(&self) -> Settings {
        self.storage.load(StorageKey::Settings).unwrap_or_default()
    }

    fn save(&self, reminder: ReminderSettings) -> bool {
        let mut settings = self.load_all();
        settings.reminder = Some(reminder);
        self.storage.save(StorageKey::Settings, &settings)
    }
}
