use rusqlite::Connection;

use crate::error::Result;
use crate::models::{MatchStatus, Statistics};

use super::SqliteStateStore;

impl SqliteStateStore {
    /// Item and match totals. `threshold` and the confirmation rate are left
    /// for the caller to fill in.
    pub fn count_statistics(&self) -> Result<Statistics> {
        self.with_conn(|conn| {
            let mut stats = Statistics {
                lost_items: count_rows(conn, "lost_items")?,
                found_items: count_rows(conn, "found_items")?,
                ..Statistics::default()
            };

            let mut stmt = conn.prepare("SELECT status, COUNT(*) FROM matches GROUP BY status")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?;
            for row in rows {
                let (status, count) = row?;
                let count = i64_to_u64_saturating(count);
                stats.matches += count;
                match status.parse::<MatchStatus>() {
                    Ok(MatchStatus::Pending) => stats.pending += count,
                    Ok(MatchStatus::Confirmed) => stats.confirmed += count,
                    Ok(MatchStatus::Rejected) => stats.rejected += count,
                    Err(_) => {}
                }
            }
            Ok(stats)
        })
    }
}

fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(i64_to_u64_saturating(count))
}

fn i64_to_u64_saturating(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
