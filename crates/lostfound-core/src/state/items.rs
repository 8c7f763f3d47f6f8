use rusqlite::{OptionalExtension, Row, params};
use tracing::info;

use crate::error::Result;
use crate::models::{FoundItem, ItemId, LostItem, NewFoundItem, NewLostItem};
use crate::store::ItemSource;

use super::{SqliteStateStore, format_timestamp, parse_required_rfc3339};

const LOST_ITEM_COLUMNS: &str =
    "id, item_name, color, location, description, contact_info, reported_date";
const FOUND_ITEM_COLUMNS: &str =
    "id, item_name, color, location, description, finder_info, found_date";

impl SqliteStateStore {
    pub fn insert_lost_item(&self, item: &NewLostItem) -> Result<ItemId> {
        let id = self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO lost_items(item_name, color, location, description, contact_info, reported_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    item.item_name,
                    item.color,
                    item.location,
                    item.description,
                    item.contact_info,
                    format_timestamp(&item.reported_at),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        info!(lost_item_id = id, "lost item stored");
        Ok(id)
    }

    pub fn insert_found_item(&self, item: &NewFoundItem) -> Result<ItemId> {
        let id = self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO found_items(item_name, color, location, description, finder_info, found_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    item.item_name,
                    item.color,
                    item.location,
                    item.description,
                    item.finder_info,
                    format_timestamp(&item.found_at),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        info!(found_item_id = id, "found item stored");
        Ok(id)
    }

    /// Rewrite the descriptive fields of a lost item. The report date is kept.
    pub fn update_lost_item(&self, id: ItemId, item: &NewLostItem) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                r"
                UPDATE lost_items
                SET item_name = ?1, color = ?2, location = ?3, description = ?4, contact_info = ?5
                WHERE id = ?6
                ",
                params![
                    item.item_name,
                    item.color,
                    item.location,
                    item.description,
                    item.contact_info,
                    id
                ],
            )?;
            Ok(affected > 0)
        })
    }

    /// Rewrite the descriptive fields of a found item. The found date is kept.
    pub fn update_found_item(&self, id: ItemId, item: &NewFoundItem) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                r"
                UPDATE found_items
                SET item_name = ?1, color = ?2, location = ?3, description = ?4, finder_info = ?5
                WHERE id = ?6
                ",
                params![
                    item.item_name,
                    item.color,
                    item.location,
                    item.description,
                    item.finder_info,
                    id
                ],
            )?;
            Ok(affected > 0)
        })
    }

    /// Removes the item together with every match that references it.
    pub fn delete_lost_item(&self, id: ItemId) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM lost_items WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }

    /// Removes the item together with every match that references it.
    pub fn delete_found_item(&self, id: ItemId) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM found_items WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }
}

impl ItemSource for SqliteStateStore {
    fn list_lost_items(&self) -> Result<Vec<LostItem>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {LOST_ITEM_COLUMNS} FROM lost_items ORDER BY reported_date DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], lost_item_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    fn list_found_items(&self) -> Result<Vec<FoundItem>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {FOUND_ITEM_COLUMNS} FROM found_items ORDER BY found_date DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], found_item_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    fn get_lost_item(&self, id: ItemId) -> Result<Option<LostItem>> {
        self.with_conn(|conn| {
            let item = conn
                .query_row(
                    &format!("SELECT {LOST_ITEM_COLUMNS} FROM lost_items WHERE id = ?1"),
                    params![id],
                    lost_item_from_row,
                )
                .optional()?;
            Ok(item)
        })
    }

    fn get_found_item(&self, id: ItemId) -> Result<Option<FoundItem>> {
        self.with_conn(|conn| {
            let item = conn
                .query_row(
                    &format!("SELECT {FOUND_ITEM_COLUMNS} FROM found_items WHERE id = ?1"),
                    params![id],
                    found_item_from_row,
                )
                .optional()?;
            Ok(item)
        })
    }
}

fn lost_item_from_row(row: &Row<'_>) -> rusqlite::Result<LostItem> {
    let reported_raw = row.get::<_, String>(6)?;
    Ok(LostItem {
        id: row.get(0)?,
        item_name: row.get(1)?,
        color: row.get(2)?,
        location: row.get(3)?,
        description: row.get(4)?,
        contact_info: row.get(5)?,
        reported_at: parse_required_rfc3339(6, &reported_raw)?,
    })
}

fn found_item_from_row(row: &Row<'_>) -> rusqlite::Result<FoundItem> {
    let found_raw = row.get::<_, String>(6)?;
    Ok(FoundItem {
        id: row.get(0)?,
        item_name: row.get(1)?,
        color: row.get(2)?,
        location: row.get(3)?,
        description: row.get(4)?,
        finder_info: row.get(5)?,
        found_at: parse_required_rfc3339(6, &found_raw)?,
    })
}
