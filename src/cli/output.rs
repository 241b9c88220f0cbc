//! Output formatting utilities

use crate::domain::{DiaryNote, MonthGrid, MoodEntry, ReminderSettings};
use chrono::{DateTime, Local, Utc};

fn local(date: DateTime<Utc>) -> DateTime<Local> {
    date.with_timezone(&Local)
}

/// DD.MM.YYYY in local time
pub fn format_date(date: DateTime<Utc>) -> String {
    local(date).format("%d.%m.%Y").to_string()
}

/// HH:MM in local time
pub fn format_time(date: DateTime<Utc>) -> String {
    local(date).format("%H:%M").to_string()
}

/// Format mood history for display
pub fn format_mood_list(moods: &[&MoodEntry]) -> String {
    if moods.is_empty() {
        return "No moods recorded yet. Add one with 'moodjour mood <type>'".to_string();
    }

    let mut output = String::new();
    for mood in moods {
        output.push_str(&format!(
            "{} {:<9} {} at {}  #{}\n",
            mood.mood.emoji(),
            mood.mood.label(),
            format_date(mood.date),
            format_time(mood.date),
            mood.id
        ));
        if !mood.note.is_empty() {
            output.push_str(&format!("   {}\n", mood.note));
        }
    }
    output
}

/// Format diary notes for display
pub fn format_note_list(notes: &[&DiaryNote]) -> String {
    if notes.is_empty() {
        return "Your diary is empty. Write something with 'moodjour note add'".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{} {}  {}  #{}\n",
            note.mood_type.emoji(),
            note.title,
            format_date(note.date),
            note.id
        ));
        for line in note.content.lines() {
            output.push_str(&format!("   {}\n", line));
        }
    }
    output
}

/// Render a month grid as text, one week per line
pub fn format_calendar(grid: &MonthGrid) -> String {
    let mut output = format!("{}\n", grid.title);
    output.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    for week in grid.weeks() {
        let line: Vec<String> = week
            .iter()
            .map(|cell| {
                if !cell.in_month {
                    format!(" {:>2} ", "·")
                } else if let Some(mood) = cell.mood {
                    format!("{:>2}{} ", cell.day, mood.emoji())
                } else if cell.is_today {
                    format!("[{:>2}]", cell.day)
                } else {
                    format!(" {:>2} ", cell.day)
                }
            })
            .collect();
        output.push_str(line.join("").trim_end());
        output.push('\n');
    }
    output
}

/// Describe reminder settings
pub fn format_reminder(settings: &ReminderSettings, next_due: Option<DateTime<Utc>>) -> String {
    if !settings.is_active() {
        return "Reminders are off".to_string();
    }

    let mut output = format!("Reminder every {} h", settings.hours);
    if let Some(due) = next_due {
        output.push_str(&format!(
            ", next at {} {}",
            format_date(due),
            format_time(due)
        ));
    }
    output
}

/// Human readable size as shown by the storage command
pub fn format_size(kib: f64) -> String {
    format!("{:.2} KB", kib)
}
