use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, lccu, open, participant_rows, setup_test_db, temp_out};

/// Id of the assistance record created by `init_db_with_data`.
const BIJSTAND_ID: i64 = 3;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    lccu()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = open(&db_path);
    let tables: Vec<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap()
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert!(tables.contains(&"objecten".to_string()));
    assert!(tables.contains(&"medewerkers_bijstand".to_string()));
    assert!(tables.contains(&"log".to_string()));
}

#[test]
fn test_add_normalizes_sin() {
    let db_path = setup_test_db("add_normalizes_sin");
    init_db_with_data(&db_path);

    let conn = open(&db_path);
    let (sin, ty, unique_id): (String, String, Option<i64>) = conn
        .query_row("SELECT sin, type, unique_id FROM objecten WHERE id = 1", [], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?))
        })
        .unwrap();

    assert_eq!(sin, "ABCD1234");
    assert_eq!(ty, "Mobile");
    assert_eq!(unique_id, None);
}

#[test]
fn test_add_rejects_invalid_sin() {
    let db_path = setup_test_db("add_rejects_invalid_sin");
    lccu()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for bad in ["ABC1234", "ABCD123", "1234ABCD", "ABCD12345", ""] {
        lccu()
            .args(["--db", &db_path, "add", bad, "--type", "Mobile"])
            .assert()
            .failure()
            .stderr(contains("Invalid SIN"));
    }

    let conn = open(&db_path);
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM objecten", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 0);
}

#[test]
fn test_add_rejects_bijstand_and_unknown_type() {
    let db_path = setup_test_db("add_rejects_bijstand_type");

    lccu()
        .args(["--db", &db_path, "add", "ABCD1234", "--type", "Bijstand"])
        .assert()
        .failure()
        .stderr(contains("bijstand"));

    lccu()
        .args(["--db", &db_path, "add", "ABCD1234", "--type", "Tablet"])
        .assert()
        .failure()
        .stderr(contains("Invalid type"));
}

#[test]
fn test_add_rejects_unknown_dienst() {
    let db_path = setup_test_db("add_rejects_unknown_dienst");

    lccu()
        .args([
            "--db",
            &db_path,
            "add",
            "ABCD1234",
            "--type",
            "Computer",
            "--dienst",
            "NOWHERE",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown dienst"));
}

#[test]
fn test_bijstand_stores_participants() {
    let db_path = setup_test_db("bijstand_stores_participants");
    init_db_with_data(&db_path);

    let conn = open(&db_path);
    let (sin, ty, aantal, unique_id, start): (String, String, i64, i64, String) = conn
        .query_row(
            "SELECT sin, type, aantal_medewerkers, unique_id, start_bijstand
             FROM objecten WHERE id = ?1",
            [BIJSTAND_ID],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
        )
        .unwrap();

    assert_eq!(sin, "BIJSTAND");
    assert_eq!(ty, "Bijstand");
    assert_eq!(aantal, 2);
    assert!((1000..=9999).contains(&unique_id));
    assert_eq!(start, "2024-03-05 08:00:00");

    let rows = participant_rows(&db_path, BIJSTAND_ID);
    let names: Vec<&str> = rows.iter().map(|r| r.1.as_str()).collect();
    assert_eq!(names, vec!["Ellen Nuyens", "Joeri Haepers"]);
    for r in &rows {
        assert_eq!(r.2.as_deref(), Some("2024-03-05 08:00:00"));
        assert_eq!(r.3.as_deref(), Some("2024-03-05 12:30:00"));
    }
}

#[test]
fn test_bijstand_rejects_end_before_start() {
    let db_path = setup_test_db("bijstand_end_before_start");

    lccu()
        .args([
            "--db",
            &db_path,
            "bijstand",
            "--medewerker",
            "Ellen Nuyens",
            "--start",
            "05-03-2024 12:00",
            "--einde",
            "05-03-2024 11:59",
        ])
        .assert()
        .failure()
        .stderr(contains("may not be before"));

    let conn = open(&db_path);
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM medewerkers_bijstand", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 0);
}

#[test]
fn test_bijstand_rejects_malformed_time_and_count_mismatch() {
    let db_path = setup_test_db("bijstand_malformed");

    lccu()
        .args(["--db", &db_path, "bijstand", "--start", "2024-03-05 08:00"])
        .assert()
        .failure()
        .stderr(contains("dd-mm-yyyy HH:MM"));

    lccu()
        .args([
            "--db",
            &db_path,
            "bijstand",
            "--aantal",
            "3",
            "--medewerker",
            "Ellen Nuyens",
        ])
        .assert()
        .failure()
        .stderr(contains("3 participant(s) announced"));
}

#[test]
fn test_bijstand_drops_blank_names_and_warns_on_unknown() {
    let db_path = setup_test_db("bijstand_blank_names");

    lccu()
        .args([
            "--db",
            &db_path,
            "bijstand",
            "--medewerker",
            "  ",
            "--medewerker",
            "Externe Collega",
        ])
        .assert()
        .success()
        .stdout(contains("not in the list of known LCCU staff"));

    let rows = participant_rows(&db_path, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, "Externe Collega");
}

#[test]
fn test_search_by_sin_substring() {
    let db_path = setup_test_db("search_by_sin");
    init_db_with_data(&db_path);

    lccu()
        .args(["--db", &db_path, "search", "--sin", "bcd"])
        .assert()
        .success()
        .stdout(contains("ABCD1234"))
        .stdout(contains("WXYZ9876").not());
}

#[test]
fn test_search_date_range_and_ingave_toggle() {
    let db_path = setup_test_db("search_date_range");
    init_db_with_data(&db_path);

    // Only the assistance record has dates in March 2024
    lccu()
        .args([
            "--db", &db_path, "search", "--from", "01-03-2024", "--to", "10-03-2024",
        ])
        .assert()
        .success()
        .stdout(contains("BIJSTAND"))
        .stdout(contains("ABCD1234").not());

    // Open-ended range: devices match on their entry date
    lccu()
        .args(["--db", &db_path, "search", "--from", "01-01-2000"])
        .assert()
        .success()
        .stdout(contains("ABCD1234"))
        .stdout(contains("WXYZ9876"))
        .stdout(contains("BIJSTAND"));

    // Without the entry date the devices have no date at all
    lccu()
        .args([
            "--db",
            &db_path,
            "search",
            "--from",
            "01-01-2000",
            "--skip-ingave",
        ])
        .assert()
        .success()
        .stdout(contains("BIJSTAND"))
        .stdout(contains("ABCD1234").not());
}

#[test]
fn test_search_rejects_malformed_date() {
    let db_path = setup_test_db("search_malformed_date");

    lccu()
        .args(["--db", &db_path, "search", "--from", "31/12/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_search_export_csv_and_json() {
    let db_path = setup_test_db("search_export");
    init_db_with_data(&db_path);

    let csv_out = temp_out("search_export", "csv");
    lccu()
        .args([
            "--db", &db_path, "search", "--export", "csv", "--file", &csv_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("id,sin,type,"));
    assert!(content.contains("ABCD1234"));
    assert!(content.contains("05-03-2024 08:00"));

    let json_out = temp_out("search_export", "json");
    lccu()
        .args([
            "--db", &db_path, "search", "--sin", "WXYZ", "--export", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sin"], "WXYZ9876");
    assert_eq!(rows[0]["type"], "Computer");
}

#[test]
fn test_edit_preserves_participants_and_regenerates_rows() {
    let db_path = setup_test_db("edit_preserves_participants");
    init_db_with_data(&db_path);

    let before = participant_rows(&db_path, BIJSTAND_ID);

    lccu()
        .args([
            "--db",
            &db_path,
            "edit",
            &BIJSTAND_ID.to_string(),
            "--start",
            "06-03-2024 09:00",
            "--einde",
            "06-03-2024 11:15",
        ])
        .assert()
        .success()
        .stdout(contains("2 participant(s)"));

    let after = participant_rows(&db_path, BIJSTAND_ID);

    let mut names_before: Vec<String> = before.iter().map(|r| r.1.clone()).collect();
    let mut names_after: Vec<String> = after.iter().map(|r| r.1.clone()).collect();
    names_before.sort();
    names_after.sort();
    assert_eq!(names_before, names_after);

    // Satellite rows are recreated, not updated
    for b in &before {
        assert!(after.iter().all(|a| a.0 != b.0));
    }
    for a in &after {
        assert_eq!(a.2.as_deref(), Some("2024-03-06 09:00:00"));
        assert_eq!(a.3.as_deref(), Some("2024-03-06 11:15:00"));
    }

    let conn = open(&db_path);
    let (aantal, start): (i64, String) = conn
        .query_row(
            "SELECT aantal_medewerkers, start_bijstand FROM objecten WHERE id = ?1",
            [BIJSTAND_ID],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(aantal, 2);
    assert_eq!(start, "2024-03-06 09:00:00");
}

#[test]
fn test_edit_replaces_participants() {
    let db_path = setup_test_db("edit_replaces_participants");
    init_db_with_data(&db_path);

    lccu()
        .args([
            "--db",
            &db_path,
            "edit",
            &BIJSTAND_ID.to_string(),
            "--medewerker",
            "Carla Winkelmans",
        ])
        .assert()
        .success();

    let rows = participant_rows(&db_path, BIJSTAND_ID);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, "Carla Winkelmans");
    // Time window carried over from the record
    assert_eq!(rows[0].2.as_deref(), Some("2024-03-05 08:00:00"));

    let conn = open(&db_path);
    let aantal: i64 = conn
        .query_row(
            "SELECT aantal_medewerkers FROM objecten WHERE id = ?1",
            [BIJSTAND_ID],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(aantal, 1);
}

#[test]
fn test_edit_rejects_end_before_start_and_keeps_rows() {
    let db_path = setup_test_db("edit_end_before_start");
    init_db_with_data(&db_path);

    let before = participant_rows(&db_path, BIJSTAND_ID);

    lccu()
        .args([
            "--db",
            &db_path,
            "edit",
            &BIJSTAND_ID.to_string(),
            "--einde",
            "04-03-2024 23:00",
        ])
        .assert()
        .failure()
        .stderr(contains("may not be before"));

    assert_eq!(participant_rows(&db_path, BIJSTAND_ID), before);
}

#[test]
fn test_edit_in_behandeling() {
    let db_path = setup_test_db("edit_in_behandeling");
    init_db_with_data(&db_path);

    lccu()
        .args([
            "--db",
            &db_path,
            "edit",
            "1",
            "--in-behandeling",
            "07-03-2024 10:00",
            "--lccu-lid",
            "Bjorn Broeckx",
        ])
        .assert()
        .success();

    let conn = open(&db_path);
    let (datum, lid): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT datum_in_behandeling, lccu_lid FROM objecten WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(datum.as_deref(), Some("2024-03-07 10:00:00"));
    assert_eq!(lid.as_deref(), Some("Bjorn Broeckx"));

    lccu()
        .args(["--db", &db_path, "edit", "1", "--no-in-behandeling"])
        .assert()
        .success();

    let datum: Option<String> = open(&db_path)
        .query_row("SELECT datum_in_behandeling FROM objecten WHERE id = 1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(datum, None);

    // No value means "now"
    lccu()
        .args(["--db", &db_path, "edit", "1", "--in-behandeling"])
        .assert()
        .success();

    let datum: Option<String> = open(&db_path)
        .query_row("SELECT datum_in_behandeling FROM objecten WHERE id = 1", [], |r| r.get(0))
        .unwrap();
    assert!(datum.is_some());
}

#[test]
fn test_edit_validates_sin_and_missing_record() {
    let db_path = setup_test_db("edit_validates");
    init_db_with_data(&db_path);

    lccu()
        .args(["--db", &db_path, "edit", "1", "--sin", "AB12"])
        .assert()
        .failure()
        .stderr(contains("Invalid SIN"));

    lccu()
        .args(["--db", &db_path, "edit", "99", "--merk", "Apple"])
        .assert()
        .failure()
        .stderr(contains("No record with id 99"));
}

#[test]
fn test_show_lists_participants() {
    let db_path = setup_test_db("show_participants");
    init_db_with_data(&db_path);

    lccu()
        .args(["--db", &db_path, "show", &BIJSTAND_ID.to_string()])
        .assert()
        .success()
        .stdout(contains("Huiszoeking"))
        .stdout(contains("Ellen Nuyens"))
        .stdout(contains("Joeri Haepers"))
        .stdout(contains("05-03-2024 08:00"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    lccu()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("ABCD1234"))
        .stdout(contains("bijstand"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&db_path);

    let out = temp_out("backup_compressed", "zip");
    let stem = out.trim_end_matches(".zip").to_string();

    lccu()
        .args([
            "--db", &db_path, "backup", "--file", &stem, "--compress", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).expect("zip written").len() > 0);
}

#[test]
fn test_options_for_type() {
    lccu()
        .args(["--test", "options", "--type", "mobile"])
        .assert()
        .success()
        .stdout(contains("GrapheneOS"))
        .stdout(contains("SD-kaart"))
        .stdout(contains("Laptop").not());
}

#[test]
fn test_config_check_reports_env_override() {
    let db_path = setup_test_db("config_check_env");

    lccu()
        .env("LCCU_DB_PATH", &db_path)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()))
        .stdout(contains("environment variable LCCU_DB_PATH"));
}
