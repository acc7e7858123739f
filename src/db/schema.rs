//! Schema creation and the drop-and-recreate upgrade path.
//!
//! The schema version lives in `PRAGMA user_version`. There is no data
//! migration: upgrading the `sleeplog` table discards its rows.

use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;
pub const EVENTS_TABLE: &str = "sleeplog";

fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sleeplog (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    TEXT,
            time    TEXT,
            action  TEXT
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

pub fn user_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_user_version(conn: &Connection, version: i32) -> rusqlite::Result<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
}

/// Bring the schema to `SCHEMA_VERSION`. Safe to call on every open.
pub fn initialize_schema(conn: &Connection) -> AppResult<()> {
    migrate_to(conn, SCHEMA_VERSION)
}

pub(crate) fn migrate_to(conn: &Connection, target: i32) -> AppResult<()> {
    let current = user_version(conn)?;

    if current > target {
        return Err(AppError::Schema(format!(
            "database schema v{current} is newer than supported v{target}"
        )));
    }

    if current == 0 || current == target {
        create_tables(conn)?;
        if current == 0 {
            set_user_version(conn, target)?;
        }
        return Ok(());
    }

    warning(format!(
        "Upgrading database from version {current} to {target}, which will destroy all old data"
    ));

    conn.execute_batch(&format!("DROP TABLE IF EXISTS {EVENTS_TABLE};"))?;
    create_tables(conn)?;
    set_user_version(conn, target)?;

    ttlog_quiet(
        conn,
        "schema_upgrade",
        &format!("v{current} -> v{target}"),
        "sleeplog table dropped and recreated",
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    fn count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM sleeplog", [], |r| r.get(0))
            .unwrap()
    }

    fn insert(conn: &Connection) {
        conn.execute(
            "INSERT INTO sleeplog (date, time, action) VALUES (?1, ?2, ?3)",
            params!["2024-01-01", "23:05", "sleep"],
        )
        .unwrap();
    }

    #[test]
    fn fresh_database_is_stamped() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        assert_eq!(user_version(&conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(count(&conn), 0);
    }

    #[test]
    fn repeated_initialize_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        insert(&conn);
        insert(&conn);

        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        assert_eq!(count(&conn), 2);
    }

    #[test]
    fn upgrade_drops_and_recreates_events() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        insert(&conn);

        migrate_to(&conn, SCHEMA_VERSION + 1).unwrap();

        assert_eq!(count(&conn), 0);
        assert_eq!(user_version(&conn).unwrap(), SCHEMA_VERSION + 1);

        let logged: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'schema_upgrade'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(logged, 1);
    }

    #[test]
    fn newer_schema_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        set_user_version(&conn, SCHEMA_VERSION + 5).unwrap();
        assert!(initialize_schema(&conn).is_err());
    }
}
