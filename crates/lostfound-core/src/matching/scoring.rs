use serde::{Deserialize, Serialize};

use crate::models::ItemAttributes;
use crate::text::{extract_keywords, keywords_overlap, normalize};

pub const NAME_MATCH_POINTS: u8 = 50;
pub const COLOR_MATCH_POINTS: u8 = 20;
pub const LOCATION_MATCH_POINTS: u8 = 20;
pub const KEYWORD_OVERLAP_POINTS: u8 = 10;

const _: () = assert!(
    NAME_MATCH_POINTS + COLOR_MATCH_POINTS + LOCATION_MATCH_POINTS + KEYWORD_OVERLAP_POINTS == 100
);

/// Which rules fired for a pair of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub name: bool,
    pub color: bool,
    pub location: bool,
    pub keywords: bool,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn total(self) -> u8 {
        let mut total = 0;
        if self.name {
            total += NAME_MATCH_POINTS;
        }
        if self.color {
            total += COLOR_MATCH_POINTS;
        }
        if self.location {
            total += LOCATION_MATCH_POINTS;
        }
        if self.keywords {
            total += KEYWORD_OVERLAP_POINTS;
        }
        total
    }
}

fn same_normalized(a: Option<&str>, b: Option<&str>) -> bool {
    normalize(a) == normalize(b)
}

#[must_use]
pub fn breakdown(a: &impl ItemAttributes, b: &impl ItemAttributes) -> ScoreBreakdown {
    ScoreBreakdown {
        name: same_normalized(a.item_name(), b.item_name()),
        color: same_normalized(a.color(), b.color()),
        location: same_normalized(a.location(), b.location()),
        keywords: keywords_overlap(
            &extract_keywords(a.description()),
            &extract_keywords(b.description()),
        ),
    }
}

/// Sum of the rule contributions for a pair; always within `0..=100`.
#[must_use]
pub fn score(a: &impl ItemAttributes, b: &impl ItemAttributes) -> u8 {
    breakdown(a, b).total()
}
