use anyhow::Result;
use lostfound_core::LostFound;
use lostfound_core::models::{ItemId, ItemKind, MatchDecision, MatchId, MatchStatus};

use super::support::{not_found, print_json};

pub(super) fn list(app: &LostFound, lost: Option<ItemId>, found: Option<ItemId>) -> Result<()> {
    let matches = match (lost, found) {
        (Some(id), _) => app.matches_for(id, ItemKind::Lost)?,
        (None, Some(id)) => app.matches_for(id, ItemKind::Found)?,
        (None, None) => app.matches()?,
    };
    print_json(&matches)
}

pub(super) fn show(app: &LostFound, id: MatchId) -> Result<()> {
    let record = app.get_match(id)?.ok_or_else(|| not_found("match", id))?;
    let lost = app.lost_item(record.lost_item_id)?;
    let found = app.found_item(record.found_item_id)?;
    print_json(&serde_json::json!({
        "match": record,
        "lost_item": lost,
        "found_item": found,
    }))
}

/// A match that is no longer pending is left as is and reported with
/// `updated: false`.
pub(super) fn decide(app: &LostFound, id: MatchId, decision: MatchDecision) -> Result<()> {
    let updated = app.decide_match(id, decision)?;
    let record = app.get_match(id)?.ok_or_else(|| not_found("match", id))?;
    let requested = MatchStatus::from(decision);
    print_json(&serde_json::json!({
        "match_id": id,
        "updated": updated,
        "requested": requested,
        "status": record.status,
    }))
}

pub(super) fn delete(app: &LostFound, id: MatchId) -> Result<()> {
    if !app.delete_match(id)? {
        return Err(not_found("match", id));
    }
    print_json(&serde_json::json!({
        "status": "ok",
        "deleted": { "kind": "match", "id": id },
    }))
}
