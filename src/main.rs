use chrono::Utc;
use clap::Parser;
use moodjour::application::{
    export_snapshot, find_latest_backup, import_file, init, ConfigService, JournalService,
    ReminderService,
};
use moodjour::cli::output::{format_reminder, format_size};
use moodjour::cli::{
    format_calendar, format_mood_list, format_note_list, Cli, Commands, NoteAction,
};
use moodjour::domain::{
    parse_day, parse_month, CalendarCursor, MonthDirection, MonthGrid, MoodType, Tab,
};
use moodjour::error::{MoodjourError, Result};
use moodjour::infrastructure::{Config, FileStore, FileSystemRepository, JournalRepository};
use regex::RegexBuilder;
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by MOODJOUR_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("MOODJOUR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A discovered journal with its data loaded
struct Workspace {
    repo: FileSystemRepository,
    config: Config,
    journal: JournalService<FileStore>,
}

fn open_workspace() -> Result<Workspace> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let storage = repo.open_storage(&config);

    if !storage.is_available() {
        warn!("storage unavailable, changes will not be saved");
    }

    Ok(Workspace {
        journal: JournalService::open(storage),
        repo,
        config,
    })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Mood { mood, note }) => {
            let mood = MoodType::from_str(&mood)?;
            let mut ws = open_workspace()?;
            ws.journal.set_active_tab(Tab::Tracker);

            let entry = ws.journal.add_mood(mood, note.join(" ").trim());
            println!(
                "Saved {} {} (#{})",
                entry.mood.emoji(),
                entry.mood.label(),
                entry.id
            );
            Ok(())
        }
        Some(Commands::History { date, limit }) => {
            let date = date.as_deref().map(parse_day).transpose()?;
            let mut ws = open_workspace()?;
            ws.journal.set_active_tab(Tab::History);

            let mut moods = match date {
                Some(day) => ws.journal.moods_on_date(day),
                None => ws.journal.moods().iter().collect(),
            };
            if let Some(n) = limit {
                moods.truncate(n);
            }
            print!("{}", with_newline(format_mood_list(&moods)));
            Ok(())
        }
        Some(Commands::DeleteMood { id }) => {
            let mut ws = open_workspace()?;
            if !ws.journal.delete_mood(id) {
                return Err(MoodjourError::EntryNotFound(id));
            }
            println!("Deleted mood #{}", id);
            Ok(())
        }
        Some(Commands::Note { action }) => run_note(action),
        Some(Commands::Calendar { month, prev, next }) => {
            let cursor = month.as_deref().map(parse_month).transpose()?;
            let mut ws = open_workspace()?;
            ws.journal.set_active_tab(Tab::Calendar);
            ws.journal
                .set_calendar(cursor.unwrap_or_else(CalendarCursor::current));
            for _ in 0..prev {
                ws.journal.change_month(MonthDirection::Prev);
            }
            for _ in 0..next {
                ws.journal.change_month(MonthDirection::Next);
            }

            let shown = ws.journal.calendar();
            let today = JournalService::<FileStore>::today();
            let grid = MonthGrid::build(shown, today, |day| {
                ws.journal
                    .find_mood_for_day(shown.year, shown.month, day)
                    .map(|m| m.mood)
            })?;
            print!("{}", format_calendar(&grid));
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let ws = open_workspace()?;
            let dir = output.unwrap_or_else(|| ws.repo.export_dir(&ws.config));

            let document = export_snapshot(ws.journal.storage());
            let path = document.write_to_dir(&dir)?;
            println!(
                "Exported {} moods and {} notes to {}",
                document.moods.len(),
                document.notes.len(),
                path.display()
            );
            Ok(())
        }
        Some(Commands::Import { file, latest }) => {
            let mut ws = open_workspace()?;
            let path = match (file, latest) {
                (Some(file), _) => file,
                (None, Some(dir)) => {
                    let dir = dir.unwrap_or_else(|| ws.repo.export_dir(&ws.config));
                    find_latest_backup(&dir).ok_or_else(|| {
                        MoodjourError::InvalidImport(format!(
                            "no backup found in {}",
                            dir.display()
                        ))
                    })?
                }
                (None, None) => {
                    return Err(MoodjourError::InvalidInput(
                        "Give a backup file or --latest".to_string(),
                    ))
                }
            };

            let snapshot = import_file(&path)?;
            let (moods, notes) = (snapshot.moods.len(), snapshot.notes.len());
            ws.journal.commit_import(snapshot);
            println!(
                "Imported {} moods and {} notes from {}",
                moods,
                notes,
                path.display()
            );
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                return Err(MoodjourError::InvalidInput(
                    "This deletes every mood and note. Re-run with --yes to confirm".to_string(),
                ));
            }
            let mut ws = open_workspace()?;
            ws.journal.clear_all();
            ws.journal.storage().clear();
            println!("All data deleted");
            Ok(())
        }
        Some(Commands::Remind { hours, off }) => {
            let ws = open_workspace()?;
            let reminders = ReminderService::new(ws.journal.storage());
            let now = Utc::now();

            let saved = if off {
                Some(reminders.disable())
            } else {
                hours.map(|h| reminders.setup(h, now))
            };
            if saved == Some(false) {
                warn!("reminder settings could not be saved");
            }

            println!(
                "{}",
                format_reminder(&reminders.load_settings(), reminders.next_due(now))
            );
            Ok(())
        }
        Some(Commands::Storage) => {
            let ws = open_workspace()?;
            let storage = ws.journal.storage();
            let status = if storage.is_available() {
                "available"
            } else {
                "unavailable"
            };
            println!("Storage: {}", status);
            println!("Namespace: {}", storage.namespace());
            println!("Size: {}", format_size(storage.size_estimate()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("namespace = {}", config.namespace);
                println!("export_dir = {}", config.export_dir.display());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: namespace, export_dir, created");
                Ok(())
            }
        }
        None => {
            println!("moodjour - Terminal mood tracker and diary");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_note(action: NoteAction) -> Result<()> {
    match action {
        NoteAction::Add {
            content,
            title,
            mood,
        } => {
            let mood = MoodType::from_str(&mood)?;
            let content = content.trim();
            if content.is_empty() {
                return Err(MoodjourError::InvalidInput(
                    "Note content cannot be empty".to_string(),
                ));
            }

            let mut ws = open_workspace()?;
            ws.journal.set_active_tab(Tab::Diary);
            let note = ws.journal.add_note(&title, content, mood);
            println!("Saved note \"{}\" (#{})", note.title, note.id);
            Ok(())
        }
        NoteAction::List { search, limit } => {
            let pattern = search
                .map(|s| {
                    RegexBuilder::new(&s)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| MoodjourError::InvalidInput(format!("Bad search: {}", e)))
                })
                .transpose()?;

            let ws = open_workspace()?;
            let mut notes: Vec<_> = ws
                .journal
                .notes()
                .iter()
                .filter(|note| {
                    pattern
                        .as_ref()
                        .is_none_or(|re| re.is_match(&note.title) || re.is_match(&note.content))
                })
                .collect();
            if let Some(n) = limit {
                notes.truncate(n);
            }
            print!("{}", with_newline(format_note_list(&notes)));
            Ok(())
        }
        NoteAction::Delete { id } => {
            let mut ws = open_workspace()?;
            if !ws.journal.delete_note(id) {
                return Err(MoodjourError::EntryNotFound(id));
            }
            println!("Deleted note #{}", id);
            Ok(())
        }
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
