#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sp() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftplan");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftplan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a command against `db_path` in test mode (user config is never read).
pub fn run(db_path: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut full = vec!["--db", db_path, "--test"];
    full.extend_from_slice(args);
    sp().args(&full).assert()
}

/// Initialize DB with the default shift catalog
pub fn init_db(db_path: &str) {
    run(db_path, &["init"]).success();
}
