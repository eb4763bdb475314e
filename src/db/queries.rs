use crate::errors::AppResult;
use crate::models::{NewObject, ObjectRecord, ObjectUpdate, Participant, SearchRow};
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const OBJECT_COLUMNS: &str = "id, sin, type, subcategorie, merk, os, dienst, datum_ingave, unique_id, \
     soort_bijstand, lccu_lid, datum_in_behandeling, aantal_medewerkers, start_bijstand, einde_bijstand";

pub fn map_object_row(row: &Row) -> Result<ObjectRecord> {
    Ok(ObjectRecord {
        id: row.get("id")?,
        sin: row.get("sin")?,
        object_type: row.get("type")?,
        subcategorie: row.get("subcategorie")?,
        merk: row.get("merk")?,
        os: row.get("os")?,
        dienst: row.get("dienst")?,
        datum_ingave: row.get("datum_ingave")?,
        unique_id: row.get("unique_id")?,
        soort_bijstand: row.get("soort_bijstand")?,
        lccu_lid: row.get("lccu_lid")?,
        datum_in_behandeling: row.get("datum_in_behandeling")?,
        aantal_medewerkers: row.get("aantal_medewerkers")?,
        start_bijstand: row.get("start_bijstand")?,
        einde_bijstand: row.get("einde_bijstand")?,
    })
}

/// Column order matches the SELECT built by `core::search`.
pub fn map_search_row(row: &Row) -> Result<SearchRow> {
    Ok(SearchRow {
        id: row.get(0)?,
        sin: row.get(1)?,
        object_type: row.get(2)?,
        subcategorie: row.get(3)?,
        merk: row.get(4)?,
        os: row.get(5)?,
        dienst: row.get(6)?,
        lccu_lid: row.get(7)?,
        datum_in_behandeling: row.get(8)?,
        start_bijstand: row.get(9)?,
        einde_bijstand: row.get(10)?,
    })
}

fn map_participant_row(row: &Row) -> Result<Participant> {
    Ok(Participant {
        id: row.get("id")?,
        object_id: row.get("object_id")?,
        medewerker: row.get::<_, Option<String>>("medewerker")?.unwrap_or_default(),
        start_bijstand: row.get("start_bijstand")?,
        einde_bijstand: row.get("einde_bijstand")?,
    })
}

/// Insert one `objecten` row and return its id.
pub fn insert_object(conn: &Connection, obj: &NewObject) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO objecten (
             sin, type, subcategorie, merk, os, dienst, datum_ingave, unique_id,
             soort_bijstand, aantal_medewerkers, start_bijstand, einde_bijstand
         )
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            obj.sin,
            obj.object_type,
            obj.subcategorie,
            obj.merk,
            obj.os,
            obj.dienst,
            obj.datum_ingave,
            obj.unique_id,
            obj.soort_bijstand,
            obj.aantal_medewerkers,
            obj.start_bijstand,
            obj.einde_bijstand,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_participant(
    conn: &Connection,
    object_id: i64,
    medewerker: &str,
    start_bijstand: Option<&str>,
    einde_bijstand: Option<&str>,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO medewerkers_bijstand (object_id, medewerker, start_bijstand, einde_bijstand)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![object_id, medewerker, start_bijstand, einde_bijstand])?;
    Ok(conn.last_insert_rowid())
}

pub fn load_object(conn: &Connection, id: i64) -> AppResult<Option<ObjectRecord>> {
    let sql = format!("SELECT {} FROM objecten WHERE id = ?1", OBJECT_COLUMNS);
    Ok(conn.query_row(&sql, [id], map_object_row).optional()?)
}

/// Participants of an assistance record, in insertion order.
pub fn load_participants(conn: &Connection, object_id: i64) -> AppResult<Vec<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, object_id, medewerker, start_bijstand, einde_bijstand
         FROM medewerkers_bijstand
         WHERE object_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([object_id], map_participant_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update the editable columns; returns the number of rows touched.
pub fn update_object(conn: &Connection, id: i64, upd: &ObjectUpdate) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE objecten SET
             sin = ?1,
             type = ?2,
             subcategorie = ?3,
             merk = ?4,
             os = ?5,
             dienst = ?6,
             soort_bijstand = ?7,
             lccu_lid = ?8,
             datum_in_behandeling = ?9,
             start_bijstand = ?10,
             einde_bijstand = ?11
         WHERE id = ?12",
        params![
            upd.sin,
            upd.object_type,
            upd.subcategorie,
            upd.merk,
            upd.os,
            upd.dienst,
            upd.soort_bijstand,
            upd.lccu_lid,
            upd.datum_in_behandeling,
            upd.start_bijstand,
            upd.einde_bijstand,
            id,
        ],
    )?;
    Ok(n)
}

pub fn delete_participants(conn: &Connection, object_id: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM medewerkers_bijstand WHERE object_id = ?1",
        [object_id],
    )?)
}

pub fn set_participant_count(conn: &Connection, object_id: i64, count: usize) -> AppResult<()> {
    conn.execute(
        "UPDATE objecten SET aantal_medewerkers = ?1 WHERE id = ?2",
        params![count as i64, object_id],
    )?;
    Ok(())
}

/// Run a search statement built by `core::search`.
pub fn search_objects(conn: &Connection, sql: &str, query_params: &[String]) -> AppResult<Vec<SearchRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(query_params.iter()), map_search_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_objects(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM objecten", [], |row| row.get(0))?)
}
