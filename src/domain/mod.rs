//! Domain layer - Moods, notes, settings and derived views

pub mod calendar;
pub mod entry;
pub mod mood;
pub mod settings;
pub mod state;

pub use calendar::{parse_day, parse_month, CalendarCell, MonthGrid};
pub use entry::{DatedRecord, DiaryNote, IdGenerator, MoodEntry, UNTITLED_NOTE};
pub use mood::{MoodType, MoodTypeInfo};
pub use settings::{ReminderSettings, Settings, MAX_REMINDER_HOURS};
pub use state::{AppState, CalendarCursor, MonthDirection, Tab};
