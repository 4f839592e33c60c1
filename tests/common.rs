#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn scal() -> Command {
    cargo_bin_cmd!("streakcal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_streakcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB seeded as of the given "today" (YYYY-MM-DD)
pub fn init_db_at(db_path: &str, today: &str) {
    scal()
        .args(["--db", db_path, "--test", "--today", today, "init"])
        .assert()
        .success();
}
