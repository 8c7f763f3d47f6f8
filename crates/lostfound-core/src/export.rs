//! CSV export of items and matches.
//!
//! Fields holding a comma, a double quote or a line break are wrapped in
//! double quotes with inner quotes doubled; everything else is written as is.

use std::io::Write;

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{FoundItem, LostItem, Match};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const LOST_ITEMS_FILE: &str = "lost_items.csv";
pub const FOUND_ITEMS_FILE: &str = "found_items.csv";
pub const MATCHES_FILE: &str = "matches.csv";

pub const LOST_ITEM_HEADERS: [&str; 7] = [
    "ID",
    "Item Name",
    "Color",
    "Location",
    "Description",
    "Contact Info",
    "Reported Date",
];
pub const FOUND_ITEM_HEADERS: [&str; 7] = [
    "ID",
    "Item Name",
    "Color",
    "Location",
    "Description",
    "Finder Info",
    "Found Date",
];
pub const MATCH_HEADERS: [&str; 6] = [
    "Match ID",
    "Lost Item ID",
    "Found Item ID",
    "Score",
    "Match Date",
    "Status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTarget {
    Lost,
    Found,
    Matches,
    All,
}

#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out)
}

pub fn write_lost_items<W: Write>(out: W, items: &[LostItem]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(LOST_ITEM_HEADERS)?;
    for item in items {
        writer.write_record([
            item.id.to_string().as_str(),
            item.item_name.as_str(),
            item.color.as_deref().unwrap_or_default(),
            item.location.as_deref().unwrap_or_default(),
            item.description.as_deref().unwrap_or_default(),
            item.contact_info.as_str(),
            format_timestamp(&item.reported_at).as_str(),
        ])?;
    }
    writer.flush()?;
    info!(rows = items.len(), "exported lost items");
    Ok(())
}

pub fn write_found_items<W: Write>(out: W, items: &[FoundItem]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(FOUND_ITEM_HEADERS)?;
    for item in items {
        writer.write_record([
            item.id.to_string().as_str(),
            item.item_name.as_str(),
            item.color.as_deref().unwrap_or_default(),
            item.location.as_deref().unwrap_or_default(),
            item.description.as_deref().unwrap_or_default(),
            item.finder_info.as_str(),
            format_timestamp(&item.found_at).as_str(),
        ])?;
    }
    writer.flush()?;
    info!(rows = items.len(), "exported found items");
    Ok(())
}

pub fn write_matches<W: Write>(out: W, matches: &[Match]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(MATCH_HEADERS)?;
    for record in matches {
        writer.write_record([
            record.id.to_string(),
            record.lost_item_id.to_string(),
            record.found_item_id.to_string(),
            record.score.to_string(),
            format_timestamp(&record.match_date),
            record.status.as_str().to_string(),
        ])?;
    }
    writer.flush()?;
    info!(rows = matches.len(), "exported matches");
    Ok(())
}
