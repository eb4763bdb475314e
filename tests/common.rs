#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lccu() -> Command {
    cargo_bin_cmd!("lccudb")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lccudb.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lccudb_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and register a small dataset: two devices and one
/// assistance record with two participants.
pub fn init_db_with_data(db_path: &str) {
    lccu()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    lccu()
        .args([
            "--db",
            db_path,
            "add",
            "abcd1234",
            "--type",
            "Mobile",
            "--subcategorie",
            "GSM",
            "--merk",
            "Samsung",
            "--os",
            "Android",
            "--dienst",
            "FGP",
        ])
        .assert()
        .success();

    lccu()
        .args([
            "--db",
            db_path,
            "add",
            "WXYZ9876",
            "--type",
            "Computer",
            "--subcategorie",
            "Laptop",
            "--os",
            "Linux",
        ])
        .assert()
        .success();

    lccu()
        .args([
            "--db",
            db_path,
            "bijstand",
            "--soort",
            "Huiszoeking",
            "--dienst",
            "LR/DRUGS",
            "--medewerker",
            "Ellen Nuyens",
            "--medewerker",
            "Joeri Haepers",
            "--start",
            "05-03-2024 08:00",
            "--einde",
            "05-03-2024 12:30",
        ])
        .assert()
        .success();
}

pub fn open(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

/// (id, medewerker, start, einde) of every participant row of `object_id`.
pub fn participant_rows(db_path: &str, object_id: i64) -> Vec<(i64, String, Option<String>, Option<String>)> {
    let conn = open(db_path);
    let mut stmt = conn
        .prepare(
            "SELECT id, medewerker, start_bijstand, einde_bijstand
             FROM medewerkers_bijstand WHERE object_id = ?1 ORDER BY id",
        )
        .expect("prepare");
    stmt.query_map([object_id], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows")
}
