use anyhow::Result;
use chrono::{DateTime, Utc};
use lostfound_core::LostFound;
use lostfound_core::models::{ItemId, ItemKind, NewFoundItem, NewLostItem};

use crate::cli::{ItemFieldArgs, ItemUpdateArgs};

use super::support::{merge_optional, non_blank, not_found, print_json};

pub(super) fn report_lost(
    app: &LostFound,
    fields: ItemFieldArgs,
    contact: String,
    reported_at: Option<DateTime<Utc>>,
) -> Result<()> {
    let mut item = NewLostItem::new(fields.name, contact);
    item.color = non_blank(fields.color);
    item.location = non_blank(fields.location);
    item.description = non_blank(fields.description);
    if let Some(at) = reported_at {
        item = item.reported_at(at);
    }
    let outcome = app.report_lost_item(item)?;
    print_json(&outcome)
}

pub(super) fn report_found(
    app: &LostFound,
    fields: ItemFieldArgs,
    finder: String,
    found_at: Option<DateTime<Utc>>,
) -> Result<()> {
    let mut item = NewFoundItem::new(fields.name, finder);
    item.color = non_blank(fields.color);
    item.location = non_blank(fields.location);
    item.description = non_blank(fields.description);
    if let Some(at) = found_at {
        item = item.found_at(at);
    }
    let outcome = app.report_found_item(item)?;
    print_json(&outcome)
}

pub(super) fn show_lost(app: &LostFound, id: ItemId) -> Result<()> {
    let item = app.lost_item(id)?.ok_or_else(|| not_found("lost item", id))?;
    let matches = app.matches_for(id, ItemKind::Lost)?;
    print_json(&serde_json::json!({
        "item": item,
        "matches": matches,
    }))
}

pub(super) fn show_found(app: &LostFound, id: ItemId) -> Result<()> {
    let item = app.found_item(id)?.ok_or_else(|| not_found("found item", id))?;
    let matches = app.matches_for(id, ItemKind::Found)?;
    print_json(&serde_json::json!({
        "item": item,
        "matches": matches,
    }))
}

pub(super) fn update_lost(
    app: &LostFound,
    id: ItemId,
    fields: ItemUpdateArgs,
    contact: Option<String>,
) -> Result<()> {
    let current = app.lost_item(id)?.ok_or_else(|| not_found("lost item", id))?;
    let edit = NewLostItem {
        item_name: fields.name.unwrap_or(current.item_name),
        color: merge_optional(fields.color, current.color),
        location: merge_optional(fields.location, current.location),
        description: merge_optional(fields.description, current.description),
        contact_info: contact.unwrap_or(current.contact_info),
        reported_at: current.reported_at,
    };
    if !app.update_lost_item(id, &edit)? {
        return Err(not_found("lost item", id));
    }
    let updated = app.lost_item(id)?.ok_or_else(|| not_found("lost item", id))?;
    print_json(&updated)
}

pub(super) fn update_found(
    app: &LostFound,
    id: ItemId,
    fields: ItemUpdateArgs,
    finder: Option<String>,
) -> Result<()> {
    let current = app.found_item(id)?.ok_or_else(|| not_found("found item", id))?;
    let edit = NewFoundItem {
        item_name: fields.name.unwrap_or(current.item_name),
        color: merge_optional(fields.color, current.color),
        location: merge_optional(fields.location, current.location),
        description: merge_optional(fields.description, current.description),
        finder_info: finder.unwrap_or(current.finder_info),
        found_at: current.found_at,
    };
    if !app.update_found_item(id, &edit)? {
        return Err(not_found("found item", id));
    }
    let updated = app.found_item(id)?.ok_or_else(|| not_found("found item", id))?;
    print_json(&updated)
}

pub(super) fn delete_lost(app: &LostFound, id: ItemId) -> Result<()> {
    if !app.delete_lost_item(id)? {
        return Err(not_found("lost item", id));
    }
    print_json(&serde_json::json!({
        "status": "ok",
        "deleted": { "kind": ItemKind::Lost, "id": id },
    }))
}

pub(super) fn delete_found(app: &LostFound, id: ItemId) -> Result<()> {
    if !app.delete_found_item(id)? {
        return Err(not_found("found item", id));
    }
    print_json(&serde_json::json!({
        "status": "ok",
        "deleted": { "kind": ItemKind::Found, "id": id },
    }))
}
