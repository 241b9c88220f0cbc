//! Backup export and import

use crate::domain::entry::serialize_iso_millis;
use crate::domain::{DiaryNote, MoodEntry, Settings};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{KeyValueStore, StorageAdapter, StorageKey};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;
use walkdir::WalkDir;

/// Version tag written into every export
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// The versioned backup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub export_date: DateTime<Utc>,
    pub moods: Vec<MoodEntry>,
    pub notes: Vec<DiaryNote>,
    pub settings: Settings,
}

/// Validated contents of an import, not yet committed anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedSnapshot {
    pub moods: Vec<MoodEntry>,
    pub notes: Vec<DiaryNote>,
    pub settings: Settings,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for this backup, stamped with the export time in millis
    pub fn backup_filename(&self) -> String {
        format!(
            "mood-tracker-backup-{}.json",
            self.export_date.timestamp_millis()
        )
    }

    /// Write the document into `dir` and return the file's path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(self.backup_filename());
        fs::write(&path, self.to_json_pretty()?)?;
        info!(path = %path.display(), "data exported");
        Ok(path)
    }
}

/// Snapshot of what storage holds right now.
///
/// Reads through the adapter rather than from in-memory state, so unsaved
/// changes are not part of the export.
pub fn export_snapshot<S: KeyValueStore>(storage: &StorageAdapter<S>) -> ExportDocument {
    export_snapshot_at(storage, Utc::now())
}

pub fn export_snapshot_at<S: KeyValueStore>(
    storage: &StorageAdapter<S>,
    at: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        version: EXPORT_FORMAT_VERSION.to_string(),
        export_date: at,
        moods: storage.load(StorageKey::Moods).unwrap_or_default(),
        notes: storage.load(StorageKey::Notes).unwrap_or_default(),
        settings: storage.load(StorageKey::Settings).unwrap_or_default(),
    }
}

/// Parse and validate an exported document.
///
/// Fails with [`MoodjourError::InvalidImport`] when `version` is missing or
/// falsy, when `moods` or `notes` are missing or not arrays, or when any
/// record does not match its schema. Nothing is mutated here; committing the
/// result is the caller's job.
pub fn import_snapshot(raw: &str) -> Result<ImportedSnapshot> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|e| MoodjourError::InvalidImport(format!("not valid JSON: {}", e)))?;

    let Value::Object(mut fields) = document else {
        return Err(MoodjourError::InvalidImport(
            "top level is not an object".to_string(),
        ));
    };

    // falsy values (empty string, 0, false, null) count as missing
    let has_version = match fields.get("version") {
        Some(Value::String(v)) => !v.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::Bool(b)) => *b,
        Some(Value::Null) | None => false,
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    };
    if !has_version {
        return Err(MoodjourError::InvalidImport(
            "missing field `version`".to_string(),
        ));
    }

    let moods: Vec<MoodEntry> = take_records(&mut fields, "moods")?;
    let notes: Vec<DiaryNote> = take_records(&mut fields, "notes")?;

    let settings = match fields.remove("settings") {
        None | Some(Value::Null) => Settings::default(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| MoodjourError::InvalidImport(format!("bad `settings`: {}", e)))?,
    };

    Ok(ImportedSnapshot {
        moods,
        notes,
        settings,
    })
}

fn take_records<T: DeserializeOwned>(
    fields: &mut serde_json::Map<String, Value>,
    name: &str,
) -> Result<Vec<T>> {
    match fields.remove(name) {
        Some(value @ Value::Array(_)) => serde_json::from_value(value)
            .map_err(|e| MoodjourError::InvalidImport(format!("bad record in `{}`: {}", name, e))),
        Some(Value::Null) | None => Err(MoodjourError::InvalidImport(format!(
            "missing field `{}`",
            name
        ))),
        Some(_) => Err(MoodjourError::InvalidImport(format!(
            "field `{}` is not a list",
            name
        ))),
    }
}

/// Read and validate a backup file
pub fn import_file(path: &Path) -> Result<ImportedSnapshot> {
    let raw = fs::read_to_string(path)?;
    import_snapshot(&raw)
}

fn backup_name_pattern() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^mood-tracker-backup-(\d+)\.json$").unwrap())
}

/// Newest backup directly inside `dir`, judged by the timestamp in its name
pub fn find_latest_backup(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?;
            let stamp: i64 = backup_name_pattern()
                .captures(name)?
                .get(1)?
                .as_str()
                .parse()
                .ok()?;
            Some((stamp, entry.into_path()))
        })
        .max_by_key(|(stamp, _)| *stamp)
        .map(|(_, path)| path)
}
