use serde::{Deserialize, Serialize};

use crate::error::{LostFoundError, Result};

pub(super) const ENV_MATCH_THRESHOLD: &str = "LOSTFOUND_MATCH_THRESHOLD";

/// Minimum score a pairing needs to be proposed as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MatchThreshold(u8);

impl MatchThreshold {
    pub const DEFAULT: Self = Self(70);
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(LostFoundError::Configuration(format!(
                "match.threshold must be within [0, {}], got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(super) fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            LostFoundError::Configuration(format!(
                "match.threshold must be an integer, got '{trimmed}'"
            ))
        })?;
        Self::try_from(value)
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MatchThreshold {
    type Error = LostFoundError;

    fn try_from(value: i64) -> Result<Self> {
        let narrowed = u8::try_from(value).map_err(|_| {
            LostFoundError::Configuration(format!(
                "match.threshold must be within [0, {}], got {value}",
                Self::MAX
            ))
        })?;
        Self::new(narrowed)
    }
}

impl From<MatchThreshold> for u8 {
    fn from(value: MatchThreshold) -> Self {
        value.0
    }
}

impl std::fmt::Display for MatchThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_seventy() {
        assert_eq!(MatchThreshold::default().get(), 70);
    }

    #[test]
    fn parse_accepts_padded_integers() {
        assert_eq!(MatchThreshold::parse(" 85 ").expect("parse").get(), 85);
        assert_eq!(MatchThreshold::parse("0").expect("parse").get(), 0);
        assert_eq!(MatchThreshold::parse("100").expect("parse").get(), 100);
    }

    #[test]
    fn parse_rejects_non_integers_and_out_of_range_values() {
        for raw in ["seventy", "70.5", "", "-1", "101", "300"] {
            let err = MatchThreshold::parse(raw).expect_err(raw);
            assert!(
                matches!(err, LostFoundError::Configuration(_)),
                "unexpected error for {raw}: {err}"
            );
        }
    }
}
