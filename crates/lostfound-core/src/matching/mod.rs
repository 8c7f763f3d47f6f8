mod finder;
mod scoring;

pub use finder::MatchFinder;
pub use scoring::{
    COLOR_MATCH_POINTS, KEYWORD_OVERLAP_POINTS, LOCATION_MATCH_POINTS, NAME_MATCH_POINTS,
    ScoreBreakdown, breakdown, score,
};
