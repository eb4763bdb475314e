//! Filtered search over `objecten`.
//!
//! The statement starts from `WHERE 1=1` and gains one clause per filled-in
//! criterion. All values travel as bound parameters; only fixed column
//! names are ever spliced into the SQL text.

use crate::db::pool::DbPool;
use crate::db::queries::search_objects;
use crate::errors::{AppError, AppResult};
use crate::models::SearchRow;
use crate::utils::date::format_search_date;

const BASE_QUERY: &str = "SELECT
    o.id,
    o.sin,
    o.type,
    o.subcategorie,
    o.merk,
    o.os,
    o.dienst,
    o.lccu_lid,
    o.datum_in_behandeling,
    o.start_bijstand,
    o.einde_bijstand
FROM objecten o
WHERE 1=1";

/// Date columns searched besides `datum_ingave`.
const DATE_COLUMNS: [&str; 3] = ["datum_in_behandeling", "start_bijstand", "einde_bijstand"];

#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Substring of the SIN.
    pub sin: Option<String>,
    /// Lower date bound, `dd-mm-yyyy` or `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Upper date bound, `dd-mm-yyyy` or `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Also match on the entry date.
    pub include_datum_ingave: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            sin: None,
            from: None,
            to: None,
            include_datum_ingave: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<String>,
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn search_date(v: &Option<String>) -> AppResult<Option<String>> {
    match non_blank(v) {
        None => Ok(None),
        Some(s) => format_search_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(format!("'{}' (use dd-mm-yyyy)", s))),
    }
}

pub fn build_search_query(criteria: &SearchCriteria) -> AppResult<SearchQuery> {
    let mut sql = String::from(BASE_QUERY);
    let mut params: Vec<String> = Vec::new();

    if let Some(sin) = non_blank(&criteria.sin) {
        sql.push_str(" AND o.sin LIKE ?");
        params.push(format!("%{}%", sin));
    }

    let from = search_date(&criteria.from)?;
    let to = search_date(&criteria.to)?;

    if from.is_some() || to.is_some() {
        let mut columns: Vec<&str> = Vec::new();
        if criteria.include_datum_ingave {
            columns.push("datum_ingave");
        }
        columns.extend(DATE_COLUMNS);

        let mut conditions = Vec::new();
        for column in columns {
            match (&from, &to) {
                (Some(f), Some(t)) => {
                    conditions.push(format!("date(o.{}) BETWEEN ? AND ?", column));
                    params.push(f.clone());
                    params.push(t.clone());
                }
                (Some(f), None) => {
                    conditions.push(format!("date(o.{}) >= ?", column));
                    params.push(f.clone());
                }
                (None, Some(t)) => {
                    conditions.push(format!("date(o.{}) <= ?", column));
                    params.push(t.clone());
                }
                (None, None) => {}
            }
        }
        sql.push_str(&format!(" AND ({})", conditions.join(" OR ")));
    }

    sql.push_str(" ORDER BY o.id");

    Ok(SearchQuery { sql, params })
}

pub struct SearchLogic;

impl SearchLogic {
    pub fn run(pool: &mut DbPool, criteria: &SearchCriteria) -> AppResult<Vec<SearchRow>> {
        let query = build_search_query(criteria)?;
        search_objects(&pool.conn, &query.sql, &query.params)
    }
}
