//! Mood and diary repository
//!
//! `JournalService` owns the in-memory [`AppState`] and mirrors every
//! mutation to the storage adapter before returning (write-through). It never
//! refreshes views itself; callers re-render after each mutation.

use crate::application::transfer::ImportedSnapshot;
use crate::domain::{
    AppState, CalendarCursor, DatedRecord, DiaryNote, IdGenerator, MoodEntry, MonthDirection,
    MoodType, Tab,
};
use crate::infrastructure::{KeyValueStore, StorageAdapter, StorageKey};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use tracing::{info, warn};

pub struct JournalService<S> {
    storage: StorageAdapter<S>,
    state: AppState,
    ids: IdGenerator,
}

impl<S: KeyValueStore> JournalService<S> {
    /// Service with empty state; nothing is read from storage
    pub fn new(storage: StorageAdapter<S>) -> Self {
        JournalService {
            storage,
            state: AppState::default(),
            ids: IdGenerator::new(),
        }
    }

    /// Service initialized from whatever storage holds
    pub fn open(storage: StorageAdapter<S>) -> Self {
        let mut service = JournalService::new(storage);
        service.load_from_persistence();
        service
    }

    pub fn storage(&self) -> &StorageAdapter<S> {
        &self.storage
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Moods, newest first
    pub fn moods(&self) -> &[MoodEntry] {
        &self.state.moods
    }

    /// Diary notes, newest first
    pub fn notes(&self) -> &[DiaryNote] {
        &self.state.notes
    }

    pub fn add_mood(&mut self, mood: MoodType, note: &str) -> MoodEntry {
        self.add_mood_at(mood, note, Utc::now())
    }

    pub fn add_mood_at(&mut self, mood: MoodType, note: &str, at: DateTime<Utc>) -> MoodEntry {
        let id = self.ids.next_id(at.timestamp_millis());
        let entry = MoodEntry::new(id, mood, note, at);

        self.state.moods.insert(0, entry.clone());
        self.persist_moods();
        entry
    }

    /// Record a diary note. Content is stored as given; rejecting empty
    /// content is up to the caller.
    pub fn add_note(&mut self, title: &str, content: &str, mood: MoodType) -> DiaryNote {
        self.add_note_at(title, content, mood, Utc::now())
    }

    pub fn add_note_at(
        &mut self,
        title: &str,
        content: &str,
        mood: MoodType,
        at: DateTime<Utc>,
    ) -> DiaryNote {
        let id = self.ids.next_id(at.timestamp_millis());
        let note = DiaryNote::new(id, title, content, mood, at);

        self.state.notes.insert(0, note.clone());
        self.persist_notes();
        note
    }

    /// Remove the mood with `id`. Returns false when there is none.
    pub fn delete_mood(&mut self, id: i64) -> bool {
        match self.state.moods.iter().position(|m| m.id == id) {
            Some(index) => {
                self.state.moods.remove(index);
                self.persist_moods();
                true
            }
            None => false,
        }
    }

    /// Remove the note with `id`. Returns false when there is none.
    pub fn delete_note(&mut self, id: i64) -> bool {
        match self.state.notes.iter().position(|n| n.id == id) {
            Some(index) => {
                self.state.notes.remove(index);
                self.persist_notes();
                true
            }
            None => false,
        }
    }

    /// Most recent mood recorded on a local calendar day. `month` is zero-based.
    pub fn find_mood_for_day(&self, year: i32, month: u32, day: u32) -> Option<&MoodEntry> {
        self.state.moods.iter().find(|mood| {
            let date = mood.local_day();
            date.year() == year && date.month0() == month && date.day() == day
        })
    }

    /// Every mood recorded on the same local calendar day as `date`
    pub fn moods_on_date(&self, date: NaiveDate) -> Vec<&MoodEntry> {
        self.state
            .moods
            .iter()
            .filter(|mood| mood.local_day() == date)
            .collect()
    }

    /// Replace each collection with the stored one, when storage has one.
    /// Anything missing or malformed leaves the in-memory collection alone.
    pub fn load_from_persistence(&mut self) {
        if let Some(moods) = self.storage.load::<Vec<MoodEntry>>(StorageKey::Moods) {
            info!(count = moods.len(), "moods loaded");
            self.state.moods = moods;
        }

        if let Some(notes) = self.storage.load::<Vec<DiaryNote>>(StorageKey::Notes) {
            info!(count = notes.len(), "notes loaded");
            self.state.notes = notes;
        }

        self.seed_ids();
    }

    /// Empty both collections and write the empty collections through
    pub fn clear_all(&mut self) {
        self.state.moods.clear();
        self.state.notes.clear();
        self.persist_moods();
        self.persist_notes();
        info!("all entries cleared");
    }

    /// Commit an imported snapshot: replace both collections and persist
    /// moods, notes and settings.
    pub fn commit_import(&mut self, snapshot: ImportedSnapshot) {
        self.state.moods = snapshot.moods;
        self.state.notes = snapshot.notes;
        self.seed_ids();

        self.persist_moods();
        self.persist_notes();
        if !self.storage.save(StorageKey::Settings, &snapshot.settings) {
            warn!("imported settings kept in memory only");
        }
        info!(
            moods = self.state.moods.len(),
            notes = self.state.notes.len(),
            "snapshot imported"
        );
    }

    pub fn calendar(&self) -> CalendarCursor {
        self.state.calendar
    }

    pub fn set_calendar(&mut self, cursor: CalendarCursor) {
        self.state.calendar = cursor;
    }

    pub fn change_month(&mut self, direction: MonthDirection) {
        self.state.calendar.step(direction);
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    /// Today's local date, for callers highlighting the current day
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn seed_ids(&mut self) {
        let existing = self
            .state
            .moods
            .iter()
            .map(|m| m.id)
            .chain(self.state.notes.iter().map(|n| n.id));
        for id in existing {
            self.ids.observe(id);
        }
    }

    fn persist_moods(&self) {
        if !self.storage.save(StorageKey::Moods, &self.state.moods) {
            warn!("moods kept in memory only");
        }
    }

    fn persist_notes(&self) {
        if !self.storage.save(StorageKey::Notes, &self.state.notes) {
            warn!("notes kept in memory only");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn service() -> JournalService<MemoryStore> {
        JournalService::new(StorageAdapter::new(MemoryStore::new()))
    }

    fn local_noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_add_mood_prepends_and_persists() {
        let mut journal = service();

        let first = journal.add_mood(MoodType::Good, "ok");
        let second = journal.add_mood(MoodType::Bad, "");

        assert_eq!(journal.moods().len(), 2);
        assert_eq!(journal.moods()[0].id, second.id);
        assert_eq!(journal.moods()[1].id, first.id);

        let stored: Vec<MoodEntry> = journal.storage().load(StorageKey::Moods).unwrap();
        assert_eq!(stored, journal.moods());
    }

    #[test]
    fn test_ids_unique_for_same_instant() {
        let mut journal = service();
        let at = local_noon(2025, 1, 17);

        let a = journal.add_mood_at(MoodType::Good, "", at);
        let b = journal.add_mood_at(MoodType::Good, "", at);
        let c = journal.add_note_at("", "text", MoodType::Good, at);

        assert!(a.id < b.id);
        assert!(b.id < c.id);
        assert_eq!(a.timestamp, b.timestamp);
    }

    #[test]
    fn test_add_note_placeholder_title() {
        let mut journal = service();

        let note = journal.add_note("", "Went hiking", MoodType::Excellent);

        assert_eq!(note.title, "Untitled");
        assert_eq!(journal.notes()[0], note);
        let stored: Vec<DiaryNote> = journal.storage().load(StorageKey::Notes).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_add_note_does_not_reject_empty_content() {
        let mut journal = service();
        let note = journal.add_note("Title", "", MoodType::Neutral);
        assert_eq!(note.content, "");
        assert_eq!(journal.notes().len(), 1);
    }

    #[test]
    fn test_delete_mood() {
        let mut journal = service();
        let entry = journal.add_mood(MoodType::Neutral, "");

        assert!(journal.delete_mood(entry.id));
        assert!(journal.moods().is_empty());
        assert!(!journal.delete_mood(entry.id));

        let stored: Vec<MoodEntry> = journal.storage().load(StorageKey::Moods).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_delete_note_unknown_id() {
        let mut journal = service();
        journal.add_note("a", "b", MoodType::Good);
        assert!(!journal.delete_note(42));
        assert_eq!(journal.notes().len(), 1);
    }

    #[test]
    fn test_find_mood_for_day_returns_newest() {
        let mut journal = service();
        let morning = local_noon(2025, 1, 17) - Duration::hours(3);
        let evening = local_noon(2025, 1, 17) + Duration::hours(6);

        journal.add_mood_at(MoodType::Bad, "morning", morning);
        let latest = journal.add_mood_at(MoodType::Excellent, "evening", evening);

        let found = journal.find_mood_for_day(2025, 0, 17).unwrap();
        assert_eq!(found.id, latest.id);

        let day = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(journal.moods_on_date(day).len(), 2);
        assert!(journal.find_mood_for_day(2025, 0, 18).is_none());
        assert!(journal.find_mood_for_day(2025, 1, 17).is_none());
    }

    #[test]
    fn test_find_mood_after_delete_never_returns_deleted() {
        let mut journal = service();
        let at = local_noon(2025, 3, 2);
        let older = journal.add_mood_at(MoodType::Good, "", at);
        let newer = journal.add_mood_at(MoodType::Bad, "", at + Duration::minutes(1));

        journal.delete_mood(newer.id);
        assert_eq!(journal.find_mood_for_day(2025, 2, 2).unwrap().id, older.id);

        journal.delete_mood(older.id);
        assert!(journal.find_mood_for_day(2025, 2, 2).is_none());
    }

    #[test]
    fn test_load_from_persistence() {
        let store = MemoryStore::new();
        {
            let mut writer = JournalService::new(StorageAdapter::new(&store));
            writer.add_mood(MoodType::Good, "one");
            writer.add_note("t", "c", MoodType::Bad);
        }

        let reader = JournalService::open(StorageAdapter::new(&store));
        assert_eq!(reader.moods().len(), 1);
        assert_eq!(reader.moods()[0].note, "one");
        assert_eq!(reader.notes().len(), 1);
    }

    #[test]
    fn test_load_keeps_memory_when_storage_malformed() {
        let store = MemoryStore::new();
        let mut journal = JournalService::new(StorageAdapter::new(&store));
        journal.add_mood(MoodType::Good, "in memory");

        store.insert_raw("moodTracker_moods", r#"{"not":"an array"}"#);
        journal.load_from_persistence();

        assert_eq!(journal.moods().len(), 1);
        assert_eq!(journal.moods()[0].note, "in memory");
    }

    #[test]
    fn test_new_ids_stay_above_loaded_ids() {
        let store = MemoryStore::new();
        let future = Utc::now() + Duration::days(365);
        {
            let mut writer = JournalService::new(StorageAdapter::new(&store));
            writer.add_mood_at(MoodType::Good, "", future);
        }

        let mut reader = JournalService::open(StorageAdapter::new(&store));
        let stored_id = reader.moods()[0].id;
        let fresh = reader.add_mood(MoodType::Bad, "");
        assert!(fresh.id > stored_id);
    }

    #[test]
    fn test_clear_all_writes_empty_collections() {
        let mut journal = service();
        journal.add_mood(MoodType::Good, "");
        journal.add_note("", "x", MoodType::Good);

        journal.clear_all();

        assert!(journal.moods().is_empty());
        assert!(journal.notes().is_empty());
        let stored: Vec<MoodEntry> = journal.storage().load(StorageKey::Moods).unwrap();
        assert!(stored.is_empty());
        let stored: Vec<DiaryNote> = journal.storage().load(StorageKey::Notes).unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_unavailable_storage_keeps_working_in_memory() {
        let store = MemoryStore::new();
        store.set_available(false);

        let mut journal = JournalService::new(StorageAdapter::new(&store));
        assert!(!journal.storage().is_available());

        let entry = journal.add_mood(MoodType::Good, "ok");
        assert_eq!(journal.moods().len(), 1);

        let today = JournalService::<MemoryStore>::today();
        let found = journal
            .find_mood_for_day(today.year(), today.month0(), today.day())
            .unwrap();
        assert_eq!(found.id, entry.id);

        store.set_available(true);
        let reloaded = JournalService::open(StorageAdapter::new(&store));
        assert!(reloaded.moods().is_empty());
    }

    #[test]
    fn test_calendar_navigation() {
        let mut journal = service();
        journal.set_calendar(CalendarCursor::new(2025, 11));
        journal.change_month(MonthDirection::Next);
        assert_eq!(journal.calendar(), CalendarCursor::new(2026, 0));
        journal.change_month(MonthDirection::Prev);
        assert_eq!(journal.calendar(), CalendarCursor::new(2025, 11));
    }

    #[test]
    fn test_active_tab() {
        let mut journal = service();
        assert_eq!(journal.active_tab(), Tab::Diary);
        journal.set_active_tab(Tab::Calendar);
        assert_eq!(journal.active_tab(), Tab::Calendar);
    }
}
