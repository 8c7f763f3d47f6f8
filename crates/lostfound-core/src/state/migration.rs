use rusqlite::Connection;

use crate::error::{LostFoundError, Result};

use super::SqliteStateStore;

const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    PRAGMA foreign_keys = ON;
    CREATE TABLE IF NOT EXISTS lost_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_name TEXT NOT NULL,
        color TEXT,
        location TEXT,
        description TEXT,
        contact_info TEXT NOT NULL,
        reported_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS found_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_name TEXT NOT NULL,
        color TEXT,
        location TEXT,
        description TEXT,
        finder_info TEXT NOT NULL,
        found_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS matches (
        match_id INTEGER PRIMARY KEY AUTOINCREMENT,
        lost_item_id INTEGER NOT NULL,
        found_item_id INTEGER NOT NULL,
        score INTEGER NOT NULL CHECK(score BETWEEN 0 AND 100),
        match_date TEXT NOT NULL,
        status TEXT NOT NULL CHECK(status IN ('PENDING', 'CONFIRMED', 'REJECTED')),
        FOREIGN KEY (lost_item_id) REFERENCES lost_items(id) ON DELETE CASCADE,
        FOREIGN KEY (found_item_id) REFERENCES found_items(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_lost_items_reported_date ON lost_items(reported_date DESC);
    CREATE INDEX IF NOT EXISTS idx_found_items_found_date ON found_items(found_date DESC);
    CREATE INDEX IF NOT EXISTS idx_matches_lost_item ON matches(lost_item_id, score DESC);
    CREATE INDEX IF NOT EXISTS idx_matches_found_item ON matches(found_item_id, score DESC);
    CREATE INDEX IF NOT EXISTS idx_matches_match_date ON matches(match_date DESC);
";

impl SqliteStateStore {
    pub fn migrate(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| LostFoundError::mutex_poisoned("sqlite"))?;
        conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
        ensure_required_column(
            &conn,
            "matches",
            "status",
            "unsupported matches schema: status is missing; reset the state database",
        )?;
        ensure_required_column(
            &conn,
            "found_items",
            "finder_info",
            "unsupported found_items schema: finder_info is missing; reset the state database",
        )?;
        drop(conn);
        Ok(())
    }
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for row in rows {
        if row? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_required_column(
    conn: &Connection,
    table: &str,
    column: &str,
    error_message: &'static str,
) -> Result<()> {
    if has_column(conn, table, column)? {
        Ok(())
    } else {
        Err(LostFoundError::Configuration(error_message.to_string()))
    }
}
