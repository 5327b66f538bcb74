#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use incidentlog::core::reference::ReferenceLogic;
use incidentlog::db::initialize::init_db;
use incidentlog::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn inc() -> Command {
    cargo_bin_cmd!("incidentlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_incidentlog.sqlite", name));
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

/// Fresh, migrated database created through the library API.
pub fn init_store(name: &str) -> String {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    db_path
}

/// Seed deposits and emergency types; returns their ids in the given order.
pub fn seed_reference(db_path: &str, deposits: &[&str], types: &[&str]) -> (Vec<i64>, Vec<i64>) {
    let mut pool = DbPool::open_existing(db_path).expect("open db");
    let d = deposits
        .iter()
        .map(|n| ReferenceLogic::add_deposit(&mut pool, n).expect("add deposit"))
        .collect();
    let t = types
        .iter()
        .map(|n| ReferenceLogic::add_emergency_type(&mut pool, n).expect("add type"))
        .collect();
    (d, t)
}

/// Initialize DB through the CLI and seed two deposits and two types.
pub fn init_cli_db(db_path: &str) {
    inc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for name in ["North Field", "South Pit"] {
        inc()
            .args(["--db", db_path, "deposits", "--add", name])
            .assert()
            .success();
    }
    for name in ["Fire", "Flooding"] {
        inc()
            .args(["--db", db_path, "types", "--add", name])
            .assert()
            .success();
    }
}

/// Add an occurrence through the CLI.
pub fn cli_add(db_path: &str, deposit: &str, kind: &str, year: &str, amount: &str, comment: &str) {
    inc()
        .args([
            "--db", db_path, "add", "--deposit", deposit, "--type", kind, "--year", year,
            "--amount", amount, "--comment", comment,
        ])
        .assert()
        .success();
}
