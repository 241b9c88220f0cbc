//! In-memory application state

use crate::domain::{DiaryNote, MoodEntry};
use chrono::{Datelike, Local, NaiveDate};

/// Which view the user last had open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Tracker,
    History,
    #[default]
    Diary,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthDirection {
    Prev,
    Next,
}

/// Month shown by the calendar view. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Self {
        CalendarCursor {
            year,
            month: month.min(11),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        CalendarCursor::new(date.year(), date.month0())
    }

    pub fn current() -> Self {
        CalendarCursor::containing(Local::now().date_naive())
    }

    /// Step one month, wrapping the year at the edges
    pub fn step(&mut self, direction: MonthDirection) {
        match direction {
            MonthDirection::Next => {
                if self.month == 11 {
                    self.month = 0;
                    self.year += 1;
                } else {
                    self.month += 1;
                }
            }
            MonthDirection::Prev => {
                if self.month == 0 {
                    self.month = 11;
                    self.year -= 1;
                } else {
                    self.month -= 1;
                }
            }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        CalendarCursor::current()
    }
}

/// Everything the journal holds in memory. Collections are newest first.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub moods: Vec<MoodEntry>,
    pub notes: Vec<DiaryNote>,
    pub calendar: CalendarCursor,
    pub active_tab: Tab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_next_wraps_year() {
        let mut cursor = CalendarCursor::new(2024, 11);
        cursor.step(MonthDirection::Next);
        assert_eq!(cursor, CalendarCursor::new(2025, 0));
    }

    #[test]
    fn test_step_prev_wraps_year() {
        let mut cursor = CalendarCursor::new(2025, 0);
        cursor.step(MonthDirection::Prev);
        assert_eq!(cursor, CalendarCursor::new(2024, 11));
    }

    #[test]
    fn test_step_within_year() {
        let mut cursor = CalendarCursor::new(2025, 5);
        cursor.step(MonthDirection::Next);
        assert_eq!(cursor.month, 6);
        cursor.step(MonthDirection::Prev);
        cursor.step(MonthDirection::Prev);
        assert_eq!(cursor.month, 4);
        assert_eq!(cursor.year, 2025);
    }

    #[test]
    fn test_containing_is_zero_based() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let cursor = CalendarCursor::containing(date);
        assert_eq!(cursor.month, 0);
        assert_eq!(cursor.first_day(), NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_default_state_is_empty_on_diary_tab() {
        let state = AppState::default();
        assert!(state.moods.is_empty());
        assert!(state.notes.is_empty());
        assert_eq!(state.active_tab, Tab::Diary);
    }
}
