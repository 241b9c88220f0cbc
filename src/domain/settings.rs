//! Persisted application settings

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Longest reminder interval accepted from the command line (one year)
pub const MAX_REMINDER_HOURS: u32 = 24 * 365;

/// Reminder interval configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub enabled: bool,
    /// Interval in hours; 0 means disabled
    pub hours: u32,
    /// Epoch millis of the last time the reminder was configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_setup: Option<i64>,
}

impl ReminderSettings {
    pub fn disabled() -> Self {
        ReminderSettings::default()
    }

    pub fn every(hours: u32, now: DateTime<Utc>) -> Self {
        ReminderSettings {
            enabled: true,
            hours,
            last_setup: Some(now.timestamp_millis()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.enabled && self.hours > 0
    }

    pub fn last_setup_at(&self) -> Option<DateTime<Utc>> {
        self.last_setup
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// First reminder tick strictly after `now`.
    /// `None` when reminders are off or the tick falls outside the date range.
    pub fn next_due(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if !self.is_active() {
            return None;
        }
        let start = self.last_setup_at()?;
        let interval_ms = i64::from(self.hours).checked_mul(HOUR_MS)?;

        let offset_ms = if start > now {
            interval_ms
        } else {
            let elapsed = (now - start).num_milliseconds();
            (elapsed / interval_ms + 1).checked_mul(interval_ms)?
        };
        start.checked_add_signed(Duration::try_milliseconds(offset_ms)?)
    }
}

/// Settings blob; fields this version does not know are kept as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderSettings>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    pub fn reminder_or_default(&self) -> ReminderSettings {
        self.reminder.clone().unwrap_or_default()
    }
}
