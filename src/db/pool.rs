//! SQLite connection wrapper (one connection per CLI invocation).

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    /// Open the database file and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let pool = Self::open(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Open the database file without touching the schema.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path)).map_err(|source| AppError::Connect {
            path: path.to_string(),
            source,
        })?;

        // Opening is lazy; make sure the file is actually reachable.
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|source| AppError::Connect {
                path: path.to_string(),
                source,
            })?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Run `func` inside a transaction. Commits when it returns `Ok`, rolls
    /// back (on drop) otherwise.
    pub fn transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
