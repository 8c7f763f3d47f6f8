use chrono::{DateTime, NaiveDateTime, Utc};
use lostfound_core::export::TIMESTAMP_FORMAT;

pub(super) fn parse_item_id(raw: &str) -> std::result::Result<i64, String> {
    let value = raw
        .parse::<i64>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if value < 1 {
        return Err("value must be >= 1".to_string());
    }
    Ok(value)
}

/// RFC 3339, or `YYYY-MM-DD HH:MM:SS` read as UTC.
pub(super) fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Ok(value.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|value| value.and_utc())
        .map_err(|_| format!("invalid timestamp '{raw}', expected RFC 3339 or YYYY-MM-DD HH:MM:SS"))
}
