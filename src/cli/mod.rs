//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, NoteAction};
pub use output::{format_calendar, format_mood_list, format_note_list};
