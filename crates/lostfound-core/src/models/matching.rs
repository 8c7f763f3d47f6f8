use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, at_storage_precision};
use crate::matching::ScoreBreakdown;

pub type MatchId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl MatchStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(format!("unknown match status: {other}")),
        }
    }
}

/// Operator verdict on a pending match. `PENDING` is deliberately not
/// representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDecision {
    Confirmed,
    Rejected,
}

impl From<MatchDecision> for MatchStatus {
    fn from(decision: MatchDecision) -> Self {
        match decision {
            MatchDecision::Confirmed => Self::Confirmed,
            MatchDecision::Rejected => Self::Rejected,
        }
    }
}

/// A match produced by the finder that has not been recorded yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub lost_item_id: ItemId,
    pub found_item_id: ItemId,
    pub score: u8,
    pub match_date: DateTime<Utc>,
    pub status: MatchStatus,
    /// Rules that produced `score`. Not persisted.
    pub rules: ScoreBreakdown,
}

impl MatchCandidate {
    pub(crate) fn pending(
        lost_item_id: ItemId,
        found_item_id: ItemId,
        rules: ScoreBreakdown,
    ) -> Self {
        Self {
            lost_item_id,
            found_item_id,
            score: rules.total(),
            match_date: at_storage_precision(Utc::now()),
            status: MatchStatus::Pending,
            rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub lost_item_id: ItemId,
    pub found_item_id: ItemId,
    pub score: u8,
    pub match_date: DateTime<Utc>,
    pub status: MatchStatus,
}

impl Match {
    pub fn from_candidate(id: MatchId, candidate: &MatchCandidate) -> Self {
        Self {
            id,
            lost_item_id: candidate.lost_item_id,
            found_item_id: candidate.found_item_id,
            score: candidate.score,
            match_date: candidate.match_date,
            status: candidate.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_roundtrip_through_from_str() {
        for status in [
            MatchStatus::Pending,
            MatchStatus::Confirmed,
            MatchStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<MatchStatus>(), Ok(status));
        }
        assert!("pending".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn status_serializes_in_upper_case() {
        let value = serde_json::to_value(MatchStatus::Confirmed).expect("serialize");
        assert_eq!(value, serde_json::json!("CONFIRMED"));
    }

    #[test]
    fn decisions_never_map_back_to_pending() {
        assert_eq!(
            MatchStatus::from(MatchDecision::Confirmed),
            MatchStatus::Confirmed
        );
        assert_eq!(
            MatchStatus::from(MatchDecision::Rejected),
            MatchStatus::Rejected
        );
    }

    #[test]
    fn pending_candidates_carry_their_rules_and_a_storable_date() {
        let rules = ScoreBreakdown {
            name: true,
            color: false,
            location: true,
            keywords: false,
        };
        let candidate = MatchCandidate::pending(1, 2, rules);
        assert_eq!(candidate.score, 70);
        assert_eq!(candidate.rules, rules);
        assert_eq!(candidate.status, MatchStatus::Pending);
        assert_eq!(candidate.match_date.timestamp_subsec_nanos() % 1_000, 0);
    }
}
