//! A single row of the sleep log.

use serde::Serialize;

/// One sleep or wake entry. Rows are never edited after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub action: String,
}

impl EventRecord {
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            time: row.get("time")?,
            action: row.get("action")?,
        })
    }
}
