use strq_types::{CharFrequencyMap, StringProperties};

use crate::hash::sha256_hex;

/// Normalize incoming text: trim leading/trailing whitespace, lower-case.
///
/// Applied before storage and before every value comparison, so lookups
/// and uniqueness checks are case-insensitive.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Compute all derived properties of a normalized value.
///
/// Pure: same value in, same properties out. Character counts operate on
/// Unicode scalar values, not bytes.
pub fn derive_properties(value: &str) -> StringProperties {
    let mut frequency = CharFrequencyMap::new();
    for ch in value.chars().filter(|c| *c != ' ') {
        *frequency.entry(ch).or_insert(0) += 1;
    }

    StringProperties {
        length: value.chars().count() as u64,
        is_palindrome: is_palindrome(value),
        unique_characters: frequency.len() as u64,
        word_count: word_count(value),
        sha256_hash: sha256_hex(value),
        character_frequency_map: frequency,
    }
}

/// A value is a palindrome when it equals its character-wise reverse.
fn is_palindrome(value: &str) -> bool {
    value.chars().eq(value.chars().rev())
}

/// Token count from a strict single-space split.
///
/// Consecutive spaces yield empty tokens that are counted as words, and
/// the empty string counts as one word. This mirrors the original product
/// behavior exactly; see `word_count_counts_empty_tokens_between_spaces`.
fn word_count(value: &str) -> u64 {
    value.split(' ').count() as u64
}
