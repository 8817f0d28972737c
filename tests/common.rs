#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add three entries: two complete, one missing its clock-out.
pub fn init_db_with_data(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, &["--office", "212A", "--date", "2025-09-01", "--in", "09:00", "--out", "17:00"]);
    add(db_path, &["--office", "308B", "--date", "2025-09-15", "--in", "08:30", "--out", "16:45"]);
    add(db_path, &["--office", "PalmerRd", "--date", "2025-10-02", "--in", "10:00"]);
}

pub fn add(db_path: &str, fields: &[&str]) {
    let mut args = vec!["--db", db_path, "add"];
    args.extend_from_slice(fields);
    rwl().args(args).assert().success();
}

/// Run `list` and return stdout.
pub fn list(db_path: &str, extra: &[&str]) -> String {
    let mut args = vec!["--db", db_path, "list"];
    args.extend_from_slice(extra);
    let output = rwl().args(args).output().expect("failed to run list");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Data rows of a `list` output (lines starting with a row number).
pub fn data_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(|l| l.to_string())
        .collect()
}
