//! Storage seams consumed by the matching engine and the match lifecycle.
//!
//! [`crate::state::SqliteStateStore`] is the durable implementation; the
//! traits exist so the decision logic can run against any population.

use crate::error::Result;
use crate::models::{
    FoundItem, ItemId, ItemKind, LostItem, Match, MatchCandidate, MatchId, MatchStatus,
};

pub trait ItemSource {
    /// All lost items, most recently reported first.
    fn list_lost_items(&self) -> Result<Vec<LostItem>>;
    /// All found items, most recently found first.
    fn list_found_items(&self) -> Result<Vec<FoundItem>>;
    fn get_lost_item(&self, id: ItemId) -> Result<Option<LostItem>>;
    fn get_found_item(&self, id: ItemId) -> Result<Option<FoundItem>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFilter {
    All,
    Item { id: ItemId, kind: ItemKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    NewestFirst,
    ScoreDesc,
}

pub trait MatchStore {
    fn insert_match(&self, candidate: &MatchCandidate) -> Result<MatchId>;
    /// Move a `PENDING` match to `status`; returns the number of rows changed.
    fn update_match_status(&self, id: MatchId, status: MatchStatus) -> Result<usize>;
    fn select_matches(&self, filter: MatchFilter, order: MatchOrder) -> Result<Vec<Match>>;
    fn get_match(&self, id: MatchId) -> Result<Option<Match>>;
    fn delete_match(&self, id: MatchId) -> Result<bool>;
}
