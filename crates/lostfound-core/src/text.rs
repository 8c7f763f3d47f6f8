use std::collections::BTreeSet;

pub type KeywordSet = BTreeSet<String>;

/// Lowercase and trim; an absent value normalizes to the empty string.
#[must_use]
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(|value| value.trim().to_lowercase())
        .unwrap_or_default()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a description on runs of non-word characters into a set of
/// normalized tokens. Missing or blank input yields the empty set.
#[must_use]
pub fn extract_keywords(description: Option<&str>) -> KeywordSet {
    let Some(description) = description else {
        return KeywordSet::new();
    };

    description
        .split(|c: char| !is_word_char(c))
        .map(|token| normalize(Some(token)))
        .filter(|token| !token.is_empty())
        .collect()
}

#[must_use]
pub fn keywords_overlap(a: &KeywordSet, b: &KeywordSet) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().any(|token| large.contains(token))
}
