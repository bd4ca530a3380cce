use serde::{Deserialize, Serialize};

/// The typed five-field query shape.
///
/// A `FilterSpec` is transient: it is built from untyped caller input by
/// the coercion step in `strq-filter`, applied once, and echoed back to
/// the caller as `filters_applied`. `None` fields are pass-through and
/// serialize as explicit nulls so the echo always shows all five fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Keep only records whose palindrome flag matches.
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on `properties.length`.
    pub min_length: Option<i64>,
    /// Inclusive upper bound on `properties.length`.
    pub max_length: Option<i64>,
    /// Exact match on `properties.word_count`.
    pub word_count: Option<i64>,
    /// Case-insensitive substring containment against `value`. The field
    /// name suggests a single character but arbitrary substrings are
    /// accepted, matching the original product behavior.
    pub contains_character: Option<String>,
}

impl FilterSpec {
    /// The five recognized field names, in canonical order.
    pub const FIELDS: [&'static str; 5] = [
        "is_palindrome",
        "min_length",
        "max_length",
        "word_count",
        "contains_character",
    ];

    /// Returns `true` if every field is `None` (the filter passes everything).
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Merge two specs field-wise, `other` winning where both are set.
    ///
    /// Used to express "apply F1 then F2" as a single conjunction when the
    /// two specs constrain independent fields.
    pub fn and(&self, other: &FilterSpec) -> FilterSpec {
        FilterSpec {
            is_palindrome: other.is_palindrome.or(self.is_palindrome),
            min_length: other.min_length.or(self.min_length),
            max_length: other.max_length.or(self.max_length),
            word_count: other.word_count.or(self.word_count),
            contains_character: other
                .contains_character
                .clone()
                .or_else(|| self.contains_character.clone()),
        }
    }
}
