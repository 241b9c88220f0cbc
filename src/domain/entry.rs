//! Mood entries, diary notes and id generation

use crate::domain::MoodType;
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Title stored when a diary note is saved without one
pub const UNTITLED_NOTE: &str = "Untitled";

/// A single recorded mood with an optional note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub mood: MoodType,
    #[serde(default)]
    pub note: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

/// A free-text diary entry tagged with a mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryNote {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub mood_type: MoodType,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

/// Records that carry a creation date
pub trait DatedRecord {
    fn date(&self) -> DateTime<Utc>;

    /// Calendar day of this record in the local timezone
    fn local_day(&self) -> NaiveDate {
        self.date().with_timezone(&Local).date_naive()
    }
}

impl DatedRecord for MoodEntry {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl DatedRecord for DiaryNote {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl MoodEntry {
    pub fn new(id: i64, mood: MoodType, note: impl Into<String>, at: DateTime<Utc>) -> Self {
        let at = truncate_to_millis(at);
        MoodEntry {
            id,
            mood,
            note: note.into(),
            date: at,
            timestamp: at.timestamp_millis(),
        }
    }
}

impl DiaryNote {
    /// Build a note; a blank title becomes [`UNTITLED_NOTE`]
    pub fn new(
        id: i64,
        title: &str,
        content: impl Into<String>,
        mood_type: MoodType,
        at: DateTime<Utc>,
    ) -> Self {
        let at = truncate_to_millis(at);
        let title = title.trim();
        DiaryNote {
            id,
            title: if title.is_empty() {
                UNTITLED_NOTE.to_string()
            } else {
                title.to_string()
            },
            content: content.into(),
            mood_type,
            date: at,
            timestamp: at.timestamp_millis(),
        }
    }
}

/// ISO-8601 with exactly three fractional digits, e.g. `2025-01-17T09:30:00.000Z`
pub fn serialize_iso_millis<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Persisted dates keep millisecond precision
fn truncate_to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(at.timestamp_millis())
        .single()
        .unwrap_or(at)
}

/// Hands out timestamp-derived ids that never repeat within a session
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Next id for a record created at `now_millis`
    pub fn next_id(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Make sure future ids stay above an id that already exists
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }
}
