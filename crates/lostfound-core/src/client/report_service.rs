use tracing::{info, warn};

use crate::error::{LostFoundError, Result};
use crate::models::{
    FoundItem, ItemKind, LostItem, Match, MatchCandidate, MatchingOutcome, NewFoundItem,
    NewLostItem, RecordedMatch, ReportOutcome,
};
use crate::store::ItemSource;

use super::LostFound;

impl LostFound {
    /// Store a lost item and run one matching pass against the found items.
    ///
    /// Only a failure to store the item fails the report. Once it is stored,
    /// matching problems end up in [`MatchingOutcome::Incomplete`].
    pub fn report_lost_item(&self, item: NewLostItem) -> Result<ReportOutcome> {
        validate_item_fields(&item.item_name, &item.contact_info, "contact info")?;
        let id = self.state.insert_lost_item(&item)?;
        let lost = LostItem::from_new(id, item);

        let matching = match self.finder.find_matches_for_lost_item(&self.state, &lost) {
            Ok(candidates) => self.record_and_notify(&candidates, |record| {
                let found = self.state.get_found_item(record.found_item_id)?.ok_or_else(|| {
                    LostFoundError::NotFound(format!("found item {}", record.found_item_id))
                })?;
                self.notifier.notify_match(record, &lost, &found)
            }),
            Err(err) => incomplete(Vec::new(), &err),
        };

        Ok(ReportOutcome {
            kind: ItemKind::Lost,
            item_id: id,
            matching,
        })
    }

    /// Store a found item and run one matching pass against the lost items.
    pub fn report_found_item(&self, item: NewFoundItem) -> Result<ReportOutcome> {
        validate_item_fields(&item.item_name, &item.finder_info, "finder info")?;
        let id = self.state.insert_found_item(&item)?;
        let found = FoundItem::from_new(id, item);

        let matching = match self.finder.find_matches_for_found_item(&self.state, &found) {
            Ok(candidates) => self.record_and_notify(&candidates, |record| {
                let lost = self.state.get_lost_item(record.lost_item_id)?.ok_or_else(|| {
                    LostFoundError::NotFound(format!("lost item {}", record.lost_item_id))
                })?;
                self.notifier.notify_match(record, &lost, &found)
            }),
            Err(err) => incomplete(Vec::new(), &err),
        };

        Ok(ReportOutcome {
            kind: ItemKind::Found,
            item_id: id,
            matching,
        })
    }

    fn record_and_notify(
        &self,
        candidates: &[MatchCandidate],
        notify: impl Fn(&Match) -> Result<()>,
    ) -> MatchingOutcome {
        let mut recorded = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let id = match self.lifecycle.record_match(candidate) {
                Ok(id) => id,
                Err(err) => return incomplete(recorded, &err),
            };
            let record = Match::from_candidate(id, candidate);
            let notified = match notify(&record) {
                Ok(()) => true,
                Err(err) => {
                    warn!(match_id = id, error = %err, "match notification failed");
                    false
                }
            };
            recorded.push(RecordedMatch {
                record,
                rules: candidate.rules,
                notified,
            });
        }
        info!(recorded = recorded.len(), "matching pass recorded");
        MatchingOutcome::Complete { matches: recorded }
    }
}

fn incomplete(matches: Vec<RecordedMatch>, err: &LostFoundError) -> MatchingOutcome {
    warn!(
        recorded = matches.len(),
        code = err.code(),
        error = %err,
        "matching incomplete"
    );
    MatchingOutcome::Incomplete {
        matches,
        error: err.to_string(),
    }
}

pub(super) fn validate_item_fields(name: &str, contact: &str, contact_label: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LostFoundError::Validation(
            "item name must not be empty".to_string(),
        ));
    }
    if contact.trim().is_empty() {
        return Err(LostFoundError::Validation(format!(
            "{contact_label} must not be empty"
        )));
    }
    Ok(())
}
