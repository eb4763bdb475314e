use crate::db::log::write_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::normalize_legacy_datetime;
use rusqlite::{Connection, params};

/// Timestamp columns of `objecten` rewritten by the legacy normalizer.
pub const NORMALIZED_COLUMNS: [&str; 3] = ["datum_in_behandeling", "start_bijstand", "einde_bijstand"];

/// Columns added after the first release, with their SQL type. Older files
/// get them through `ALTER TABLE`.
const OBJECTEN_LATE_COLUMNS: [(&str, &str); 6] = [
    ("soort_bijstand", "TEXT"),
    ("lccu_lid", "TEXT"),
    ("datum_in_behandeling", "TEXT"),
    ("aantal_medewerkers", "INTEGER"),
    ("start_bijstand", "TEXT"),
    ("einde_bijstand", "TEXT"),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_objecten_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS objecten (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            sin                  TEXT NOT NULL,
            type                 TEXT,
            subcategorie         TEXT,
            merk                 TEXT,
            os                   TEXT,
            dienst               TEXT,
            datum_ingave         TEXT,
            unique_id            INTEGER,
            soort_bijstand       TEXT,
            lccu_lid             TEXT,
            datum_in_behandeling TEXT,
            aantal_medewerkers   INTEGER,
            start_bijstand       TEXT,
            einde_bijstand       TEXT
        );
        "#,
    )?;
    Ok(())
}

fn create_medewerkers_bijstand_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medewerkers_bijstand (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            object_id      INTEGER,
            medewerker     TEXT,
            start_bijstand TEXT,
            einde_bijstand TEXT,
            FOREIGN KEY(object_id) REFERENCES objecten(id)
        );
        "#,
    )?;
    Ok(())
}

/// Column names of `table`.
pub fn table_columns(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

/// Add the assistance columns to an `objecten` table created by an early
/// release.
fn migrate_add_missing_objecten_columns(conn: &Connection) -> AppResult<()> {
    let existing = table_columns(conn, "objecten")?;

    for (column, sql_type) in OBJECTEN_LATE_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }

        let version = format!("add_objecten_{}", column);
        conn.execute(
            &format!("ALTER TABLE objecten ADD COLUMN {} {}", column, sql_type),
            [],
        )
        .map_err(|e| AppError::Migration(format!("failed to add column '{}': {}", column, e)))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            params![version, format!("Added '{}' to objecten", column)],
        )?;

        success(format!("Migration applied: {} → added '{}' to objecten", version, column));
    }

    Ok(())
}

/// Rewrite every legacy timestamp in the normalized columns into
/// `YYYY-MM-DD HH:MM:SS`. Returns how many values changed.
pub fn normalize_datetime_fields(conn: &Connection) -> AppResult<usize> {
    let mut changed = 0;

    for column in NORMALIZED_COLUMNS {
        let rows: Vec<(i64, String)> = {
            let mut stmt = conn.prepare(&format!(
                "SELECT id, {column} FROM objecten
                 WHERE {column} IS NOT NULL AND TRIM({column}) != ''"
            ))?;
            let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            mapped.collect::<Result<_, _>>()?
        };

        let mut update = conn.prepare(&format!("UPDATE objecten SET {column} = ?1 WHERE id = ?2"))?;
        for (id, value) in rows {
            if let Some(normalized) = normalize_legacy_datetime(Some(&value))
                && normalized != value
            {
                update.execute(params![normalized, id])?;
                changed += 1;
            }
        }
    }

    Ok(changed)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() every time the database is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    create_objecten_table(conn)?;
    create_medewerkers_bijstand_table(conn)?;

    // 3) Columns missing in files from early releases
    migrate_add_missing_objecten_columns(conn)?;

    // 4) Legacy timestamp formats
    let changed = normalize_datetime_fields(conn)?;
    if changed > 0 {
        warning(format!("Normalized {} legacy timestamp(s) to YYYY-MM-DD HH:MM:SS", changed));
        if let Err(e) = write_log(
            conn,
            "normalize",
            "objecten",
            &format!("Normalized {} legacy timestamp(s)", changed),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
