//! Month grid derived from recorded moods

use crate::domain::{CalendarCursor, MoodType};
use crate::error::{MoodjourError, Result};
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Minimum number of cells in a grid (five full weeks)
const MIN_CELLS: usize = 35;

/// One square of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: u32,
    /// False for padding days borrowed from the neighbouring months
    pub in_month: bool,
    pub mood: Option<MoodType>,
    pub is_today: bool,
}

impl CalendarCell {
    fn padding(day: u32) -> Self {
        CalendarCell {
            day,
            in_month: false,
            mood: None,
            is_today: false,
        }
    }
}

/// Monday-first grid for one month
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub title: String,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Build the grid for `cursor`. `mood_for_day` is asked once per day of the month.
    pub fn build<F>(cursor: CalendarCursor, today: NaiveDate, mut mood_for_day: F) -> Result<Self>
    where
        F: FnMut(u32) -> Option<MoodType>,
    {
        let first = cursor.first_day().ok_or_else(|| {
            MoodjourError::InvalidDate(format!("{}-{}", cursor.month + 1, cursor.year))
        })?;
        let days_in_month = days_in_month(first);
        let lead = first.weekday().num_days_from_monday();
        let prev_last_day = first.pred_opt().map(|d| d.day()).unwrap_or(31);

        let mut cells = Vec::with_capacity(42);

        for offset in (0..lead).rev() {
            cells.push(CalendarCell::padding(prev_last_day - offset));
        }

        for day in 1..=days_in_month {
            let is_today = today.year() == cursor.year
                && today.month0() == cursor.month
                && today.day() == day;
            cells.push(CalendarCell {
                day,
                in_month: true,
                mood: mood_for_day(day),
                is_today,
            });
        }

        let mut next_day = 1;
        while cells.len() < MIN_CELLS || cells.len() % 7 != 0 {
            cells.push(CalendarCell::padding(next_day));
            next_day += 1;
        }

        Ok(MonthGrid {
            title: format!("{} {}", MONTH_NAMES[cursor.month as usize], cursor.year),
            cells,
        })
    }

    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(7)
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Parse a DD-MM-YYYY day
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| MoodjourError::InvalidDate(input.to_string()))
}

/// Parse an MM-YYYY month
pub fn parse_month(input: &str) -> Result<CalendarCursor> {
    parse_day(&format!("01-{}", input.trim()))
        .map(CalendarCursor::containing)
        .map_err(|_| MoodjourError::InvalidDate(input.to_string()))
}
