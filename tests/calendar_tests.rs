//! Integration tests for the calendar view and reminders

#![allow(deprecated)]

use chrono::Local;
use predicates::prelude::*;

mod common;
use common::{init_journal, moodjour_in};

#[test]
fn test_calendar_for_given_month() {
    let temp = init_journal();

    moodjour_in(temp.path())
        .args(["calendar", "--month", "02-2024"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("February 2024\n"))
        .stdout(predicate::str::contains(" Mo  Tu  We  Th  Fr  Sa  Su"))
        .stdout(predicate::str::contains("29"));
}

#[test]
fn test_calendar_navigation_wraps_year() {
    let temp = init_journal();

    moodjour_in(temp.path())
        .args(["calendar", "--month", "12-2024", "--next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("January 2025\n"));

    moodjour_in(temp.path())
        .args(["calendar", "--month", "01-2025", "--prev", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("November 2024\n"));
}

#[test]
fn test_calendar_shows_todays_mood() {
    let temp = init_journal();

    moodjour_in(temp.path()).args(["mood", "bad"]).assert().success();
    moodjour_in(temp.path()).args(["mood", "excellent"]).assert().success();

    let title = Local::now().format("%B %Y").to_string();
    moodjour_in(temp.path())
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicate::str::contains(title))
        .stdout(predicate::str::contains("😄"))
        .stdout(predicate::str::contains("😞").not());
}

#[test]
fn test_calendar_bad_month() {
    let temp = init_journal();

    moodjour_in(temp.path())
        .args(["calendar", "--month", "13-2024"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_remind_set_show_and_disable() {
    let temp = init_journal();

    moodjour_in(temp.path())
        .arg("remind")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminders are off"));

    moodjour_in(temp.path())
        .args(["remind", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder every 3 h, next at"));

    moodjour_in(temp.path())
        .arg("remind")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder every 3 h"));

    let settings = std::fs::read_to_string(
        temp.path().join(".moodjour/store/moodTracker_settings.json"),
    )
    .unwrap();
    assert!(settings.contains("\"lastSetup\""));

    moodjour_in(temp.path())
        .args(["remind", "--off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminders are off"));
}

#[test]
fn test_remind_rejects_interval_beyond_a_year() {
    let temp = init_journal();

    moodjour_in(temp.path())
        .args(["remind", "4294967295"])
        .assert()
        .failure()
        .code(2);

    moodjour_in(temp.path())
        .arg("remind")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminders are off"));
}

#[test]
fn test_remind_with_stored_huge_interval_does_not_crash() {
    let temp = init_journal();
    std::fs::write(
        temp.path().join(".moodjour/store/moodTracker_settings.json"),
        r#"{"reminder":{"enabled":true,"hours":4294967295,"lastSetup":0}}"#,
    )
    .unwrap();

    moodjour_in(temp.path())
        .arg("remind")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder every 4294967295 h"))
        .stdout(predicate::str::contains("next at").not());
}
