//! The sleep log store: one SQLite handle around the `sleeplog` table.

use crate::db::schema::initialize_schema;
use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};

pub struct EventStore {
    path: PathBuf,
    conn: Option<Connection>,
}

impl EventStore {
    /// A store bound to `path`. Nothing is opened until [`EventStore::open`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            conn: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Open a writable handle, creating the file when missing, and make sure
    /// the schema is current. Every failure here is `StoreUnavailable`.
    pub fn open(&mut self) -> AppResult<()> {
        if self.conn.is_some() {
            return Ok(());
        }

        let unavailable = |reason: String| AppError::StoreUnavailable {
            path: self.path.display().to_string(),
            reason,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| unavailable(e.to_string()))?;
        }

        let conn = Connection::open(&self.path).map_err(|e| unavailable(e.to_string()))?;
        initialize_schema(&conn).map_err(|e| unavailable(e.to_string()))?;

        self.conn = Some(conn);
        Ok(())
    }

    /// Release the handle. A no-op when the store was never opened.
    pub fn close(&mut self) -> AppResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| AppError::Db(e))?;
        }
        Ok(())
    }

    pub fn conn(&self) -> AppResult<&Connection> {
        self.conn.as_ref().ok_or(AppError::StoreClosed)
    }

    /// Append one record and return its id. The insert runs in autocommit
    /// mode, so the row is on disk when this returns.
    pub fn create_record(&self, date: &str, time: &str, action: &str) -> AppResult<i64> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "INSERT INTO sleeplog (date, time, action)
             VALUES (?1, ?2, ?3)",
        )?;
        stmt.execute(params![date, time, action])?;
        Ok(conn.last_insert_rowid())
    }

    /// Every record, most recent first.
    pub fn fetch_all(&self) -> AppResult<Vec<EventRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, time, action FROM sleeplog
             ORDER BY id DESC",
        )?;

        let rows = stmt.query_map([], EventRecord::from_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Delete every record. Returns how many rows were removed.
    pub fn reset(&self) -> AppResult<usize> {
        let n = self.conn()?.execute("DELETE FROM sleeplog", [])?;
        Ok(n)
    }
}

impl Drop for EventStore {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Run `func` inside one store session: open, call, close. The handle is
/// released on the error path too.
pub fn with_store<F, T>(path: impl AsRef<Path>, func: F) -> AppResult<T>
where
    F: FnOnce(&mut EventStore) -> AppResult<T>,
{
    let mut store = EventStore::new(path);
    store.open()?;
    let out = func(&mut store)?;
    store.close()?;
    Ok(out)
}
