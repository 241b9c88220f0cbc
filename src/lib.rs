//! moodjour - Terminal mood tracker and diary
//!
//! Records emoji moods with optional notes, keeps a free-text diary, shows
//! history as a list or a month calendar and round-trips everything through a
//! versioned JSON backup. All data lives in namespaced JSON blobs inside a
//! `.moodjour/` workspace.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
