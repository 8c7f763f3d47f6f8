use crate::error::Result;
use crate::models::{ItemId, ItemKind, Match, MatchDecision, MatchId, Statistics};

use super::LostFound;

impl LostFound {
    /// Every match, newest first.
    pub fn matches(&self) -> Result<Vec<Match>> {
        self.lifecycle.list_all_matches()
    }

    /// Matches of one lost or found item, best score first.
    pub fn matches_for(&self, item_id: ItemId, kind: ItemKind) -> Result<Vec<Match>> {
        self.lifecycle.list_matches_for(item_id, kind)
    }

    pub fn get_match(&self, id: MatchId) -> Result<Option<Match>> {
        self.lifecycle.get_match(id)
    }

    /// `false` when the match is unknown or no longer pending.
    pub fn decide_match(&self, id: MatchId, decision: MatchDecision) -> Result<bool> {
        self.lifecycle.update_status(id, decision)
    }

    pub fn delete_match(&self, id: MatchId) -> Result<bool> {
        self.lifecycle.delete_match(id)
    }

    pub fn statistics(&self) -> Result<Statistics> {
        let mut stats = self.state.count_statistics()?;
        stats.threshold = self.finder.threshold().get();
        stats.compute_confirmation_rate();
        Ok(stats)
    }
}
