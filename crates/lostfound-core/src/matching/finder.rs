use tracing::{debug, info};

use crate::config::MatchThreshold;
use crate::error::Result;
use crate::models::{FoundItem, ItemId, LostItem, MatchCandidate};
use crate::store::ItemSource;

use super::scoring::{ScoreBreakdown, breakdown};

/// Scores one reported item against the opposite population and keeps the
/// pairs that reach the threshold.
///
/// The finder only constructs candidates. Recording them and notifying the
/// parties is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFinder {
    threshold: MatchThreshold,
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new(MatchThreshold::DEFAULT)
    }
}

impl MatchFinder {
    #[must_use]
    pub fn new(threshold: MatchThreshold) -> Self {
        debug!(threshold = threshold.get(), "match finder initialized");
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> MatchThreshold {
        self.threshold
    }

    pub fn find_matches_for_found_item(
        &self,
        source: &impl ItemSource,
        found: &FoundItem,
    ) -> Result<Vec<MatchCandidate>> {
        let lost_items = source.list_lost_items()?;
        Ok(self.candidates_for_found_item(found, &lost_items))
    }

    pub fn find_matches_for_lost_item(
        &self,
        source: &impl ItemSource,
        lost: &LostItem,
    ) -> Result<Vec<MatchCandidate>> {
        let found_items = source.list_found_items()?;
        Ok(self.candidates_for_lost_item(lost, &found_items))
    }

    /// Candidates in the order of `lost_items`.
    #[must_use]
    pub fn candidates_for_found_item(
        &self,
        found: &FoundItem,
        lost_items: &[LostItem],
    ) -> Vec<MatchCandidate> {
        info!(
            found_item_id = found.id,
            candidates = lost_items.len(),
            "searching lost items for matches"
        );
        let matches = lost_items
            .iter()
            .filter_map(|lost| self.accept(lost.id, found.id, breakdown(lost, found)))
            .collect::<Vec<_>>();
        info!(found_item_id = found.id, matches = matches.len(), "matching pass finished");
        matches
    }

    /// Candidates in the order of `found_items`.
    #[must_use]
    pub fn candidates_for_lost_item(
        &self,
        lost: &LostItem,
        found_items: &[FoundItem],
    ) -> Vec<MatchCandidate> {
        info!(
            lost_item_id = lost.id,
            candidates = found_items.len(),
            "searching found items for matches"
        );
        let matches = found_items
            .iter()
            .filter_map(|found| self.accept(lost.id, found.id, breakdown(lost, found)))
            .collect::<Vec<_>>();
        info!(lost_item_id = lost.id, matches = matches.len(), "matching pass finished");
        matches
    }

    fn accept(
        &self,
        lost_item_id: ItemId,
        found_item_id: ItemId,
        rules: ScoreBreakdown,
    ) -> Option<MatchCandidate> {
        let score = rules.total();
        if score < self.threshold.get() {
            return None;
        }
        debug!(lost_item_id, found_item_id, score, "match candidate");
        Some(MatchCandidate::pending(lost_item_id, found_item_id, rules))
    }
}
