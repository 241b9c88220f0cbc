//! CLI command definitions

use crate::domain::MAX_REMINDER_HOURS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Terminal mood tracker and diary", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record how you feel right now
    Mood {
        /// excellent, good, neutral, bad or terrible
        #[arg(value_name = "TYPE")]
        mood: String,

        /// Optional note, may span several words
        #[arg(value_name = "NOTE")]
        note: Vec<String>,
    },

    /// Show recorded moods, newest first
    History {
        /// Only moods from this day (DD-MM-YYYY)
        #[arg(long)]
        date: Option<String>,

        /// Maximum number of moods to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a recorded mood by id
    DeleteMood {
        id: i64,
    },

    /// Diary notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show a month with the mood of each day
    Calendar {
        /// Month to show (MM-YYYY, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Step back this many months
        #[arg(long, default_value_t = 0)]
        prev: u32,

        /// Step forward this many months
        #[arg(long, default_value_t = 0)]
        next: u32,
    },

    /// Write a backup file
    Export {
        /// Directory to write to (default: configured export_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all data with the contents of a backup file
    Import {
        /// Backup file to import
        #[arg(required_unless_present = "latest", conflicts_with = "latest")]
        file: Option<PathBuf>,

        /// Import the newest backup found in this directory (default: export_dir)
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        latest: Option<Option<PathBuf>>,
    },

    /// Delete every mood and note
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show or change the reminder interval
    Remind {
        /// Interval in hours (0 disables, at most one year)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_REMINDER_HOURS)))]
        hours: Option<u32>,

        /// Disable reminders
        #[arg(long, conflicts_with = "hours")]
        off: bool,
    },

    /// Show storage availability and size
    Storage,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Write a diary note
    Add {
        /// Note text
        content: String,

        /// Note title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Mood of the note
        #[arg(short, long, default_value = "excellent")]
        mood: String,
    },

    /// List diary notes, newest first
    List {
        /// Only notes whose title or content matches this regex (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of notes to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a diary note by id
    Delete {
        id: i64,
    },
}
