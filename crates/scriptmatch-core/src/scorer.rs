//! Token-set similarity between filename stems.
//!
//! The fuzzywuzzy token-set construction on top of strsim: split both
//! strings into word token sets, then compare the shared tokens against
//! the tokens unique to each side. Robust to word reordering and partial
//! overlap, which is exactly what release-group filename variations need.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Similarity between two strings as an integer percentage in [0,100].
///
/// Case-insensitive and order-independent: identical token sets score 100,
/// disjoint token sets score near 0. Pure and deterministic.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        // No word-like content to compare on one side.
        return if tokens_a == tokens_b { 100 } else { 0 };
    }

    // BTreeSet iteration is sorted, so the joined strings are canonical.
    let common: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let base = common.join(" ");
    let combined_a = join_groups(&common, &only_a);
    let combined_b = join_groups(&common, &only_b);

    let ratio = normalized_levenshtein(&base, &combined_a)
        .max(normalized_levenshtein(&base, &combined_b))
        .max(normalized_levenshtein(&combined_a, &combined_b));

    (ratio * 100.0).round() as u32
}

fn tokenize(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_groups(common: &[&str], unique: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(common.len() + unique.len());
    parts.extend_from_slice(common);
    parts.extend_from_slice(unique);
    parts.join(" ")
}
