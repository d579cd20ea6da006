//! Candidate keyword extraction from search-result text.
//!
//! Output order is deterministic: curated terms first, then words in the
//! order they appear, with later duplicates dropped.

use crate::lexicon::{
    lookup, lookup_in_text, MEANINGFUL_PATTERNS, PARTICLE_SUFFIXES, SHOPPING_BRAND_PATTERNS,
    SHOPPING_CATEGORY_PATTERNS, SHOPPING_PRODUCT_PATTERNS,
};

/// Keeps the first occurrence of each string.
pub fn dedupe_preserving_order(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Whitespace-separated words of three or more characters that do not end
/// in a particle.
fn candidate_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 2 && !word.ends_with(PARTICLE_SUFFIXES))
}

/// Related-keyword candidates for `seed` from blog or news text.
#[must_use]
pub fn extract_meaningful_keywords(text: &str, seed: &str) -> Vec<String> {
    let curated = lookup(MEANINGFUL_PATTERNS, seed)
        .into_iter()
        .flat_map(|terms| terms.iter().map(ToString::to_string));
    let words = candidate_words(text).map(str::to_string);
    dedupe_preserving_order(curated.chain(words))
}

/// Shopping keyword candidates from one listing field (title, brand, maker,
/// or a category segment).
#[must_use]
pub fn extract_shopping_keywords(text: &str) -> Vec<String> {
    let tables = [
        SHOPPING_BRAND_PATTERNS,
        SHOPPING_CATEGORY_PATTERNS,
        SHOPPING_PRODUCT_PATTERNS,
    ];
    let curated = tables
        .into_iter()
        .filter_map(|table| lookup_in_text(table, text))
        .flat_map(|terms| terms.iter().map(ToString::to_string));
    let words = candidate_words(text).map(str::to_string);
    dedupe_preserving_order(curated.chain(words))
}
