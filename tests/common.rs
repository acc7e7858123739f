#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use sleeplogger::db::EventStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("sleeplogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sleeplogger.sqlite", name));
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

/// Open a store on a fresh DB file through the library API
pub fn open_store(name: &str) -> EventStore {
    let mut store = EventStore::new(setup_test_db(name));
    store.open().expect("open store");
    store
}

/// Initialize DB through the CLI and log one night of sleep
pub fn init_db_with_night(db_path: &str) {
    slg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args(["--db", db_path, "sleep", "--at", "2024-01-01 23:05"])
        .assert()
        .success();

    slg()
        .args(["--db", db_path, "wake", "--at", "2024-01-02 07:10"])
        .assert()
        .success();
}

/// Fresh empty directory under the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sleeplogger_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Command running with its own HOME and working directory
pub fn slg_in(home: &std::path::Path, cwd: &std::path::Path) -> Command {
    let mut cmd = slg();
    cmd.env("HOME", home).current_dir(cwd);
    cmd
}
