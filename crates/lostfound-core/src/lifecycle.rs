use tracing::info;

use crate::error::Result;
use crate::models::{
    ItemId, ItemKind, Match, MatchCandidate, MatchDecision, MatchId, MatchStatus,
};
use crate::store::{MatchFilter, MatchOrder, MatchStore};

/// Records matches and moves them out of `PENDING`.
///
/// Only pending matches can be decided. Deciding a match that is already
/// confirmed or rejected changes nothing and reports `false`, the same as an
/// unknown id.
#[derive(Debug, Clone)]
pub struct MatchLifecycle<S> {
    store: S,
}

impl<S: MatchStore> MatchLifecycle<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a candidate. An error means no match exists and nobody may be
    /// notified about it.
    pub fn record_match(&self, candidate: &MatchCandidate) -> Result<MatchId> {
        self.store.insert_match(candidate)
    }

    pub fn update_status(&self, id: MatchId, decision: MatchDecision) -> Result<bool> {
        let status = MatchStatus::from(decision);
        let affected = self.store.update_match_status(id, status)?;
        if affected > 0 {
            info!(match_id = id, %status, "match status updated");
        }
        Ok(affected > 0)
    }

    /// Matches of one item, best score first. Equal scores keep the store's order.
    pub fn list_matches_for(&self, item_id: ItemId, kind: ItemKind) -> Result<Vec<Match>> {
        self.store.select_matches(
            MatchFilter::Item { id: item_id, kind },
            MatchOrder::ScoreDesc,
        )
    }

    /// Every match, newest first.
    pub fn list_all_matches(&self) -> Result<Vec<Match>> {
        self.store.select_matches(MatchFilter::All, MatchOrder::NewestFirst)
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        self.store.get_match(id)
    }

    pub fn delete_match(&self, id: MatchId) -> Result<bool> {
        let deleted = self.store.delete_match(id)?;
        if deleted {
            info!(match_id = id, "match deleted");
        }
        Ok(deleted)
    }
}
