use serde::{Deserialize, Serialize};

use super::{ItemId, ItemKind, Match};
use crate::matching::ScoreBreakdown;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMatch {
    #[serde(rename = "match")]
    pub record: Match,
    /// Which matching rules fired for this pair.
    pub rules: ScoreBreakdown,
    pub notified: bool,
}

/// Matching half of a report. The item itself is already stored when this
/// value exists, so `Incomplete` never means the report was lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchingOutcome {
    Complete {
        matches: Vec<RecordedMatch>,
    },
    Incomplete {
        matches: Vec<RecordedMatch>,
        error: String,
    },
}

impl MatchingOutcome {
    pub fn matches(&self) -> &[RecordedMatch] {
        match self {
            Self::Complete { matches } | Self::Incomplete { matches, .. } => matches,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOutcome {
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub matching: MatchingOutcome,
}
