#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("MOODJOUR_NAMESPACE");
    cmd.env_remove("MOODJOUR_LOG");
    cmd
}

/// Temp directory with an initialized journal
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodjour_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Command running inside `dir`
pub fn moodjour_in(dir: &Path) -> Command {
    let mut cmd = moodjour_cmd();
    cmd.current_dir(dir);
    cmd
}
