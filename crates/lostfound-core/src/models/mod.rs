use chrono::{DateTime, SubsecRound, Utc};

mod item;
mod matching;
mod report;
mod stats;

pub use item::{
    FoundItem, ItemAttributes, ItemId, ItemKind, LostItem, NewFoundItem, NewLostItem,
};
pub use matching::{Match, MatchCandidate, MatchDecision, MatchId, MatchStatus};
pub use report::{MatchingOutcome, RecordedMatch, ReportOutcome};
pub use stats::Statistics;

/// The store keeps microseconds; in-memory values are cut the same way so a
/// record compares equal to what is read back.
pub(crate) fn at_storage_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(6)
}
