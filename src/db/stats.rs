use crate::db::pool::DbPool;
use crate::db::queries::count_objects;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::format_for_display;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORDS PER TYPE
    //
    let total = count_objects(&pool.conn)?;
    println!("{}• Total records:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    let mut stmt = pool.conn.prepare(
        "SELECT COALESCE(NULLIF(TRIM(type), ''), '(none)'), COUNT(*)
         FROM objecten
         GROUP BY 1
         ORDER BY 1",
    )?;
    let per_type = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
    for r in per_type {
        let (t, n) = r?;
        println!("    {:<12} {}", t, n);
    }

    let participants: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM medewerkers_bijstand", [], |row| row.get(0))?;
    println!(
        "{}• Assistance participants:{} {}",
        CYAN, RESET, participants
    );

    //
    // 3) ENTRY DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT MIN(datum_ingave) FROM objecten WHERE datum_ingave IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(datum_ingave) FROM objecten WHERE datum_ingave IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let fmt = |v: Option<String>| match v {
        Some(s) => format_for_display(Some(&s)),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Entry dates:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
