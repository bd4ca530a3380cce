use serde::Serialize;

use strq_types::{FilterSpec, StringRecord};

/// The outcome of evaluating a [`FilterSpec`] over a record snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct FilterResult {
    /// Records that passed every non-null predicate, in insertion order.
    pub data: Vec<StringRecord>,
    /// `data.len()`, echoed for the wire format.
    pub count: usize,
    /// The coerced spec that was applied, nulls preserved.
    pub filters_applied: FilterSpec,
}

/// Evaluate a typed spec against a record snapshot.
///
/// Each non-null field narrows the set by logical AND; null fields pass
/// everything through. The predicates are independent, so any evaluation
/// order produces the same set. Evaluation itself cannot fail: every
/// value reaching this point has already been coerced.
pub fn apply(records: Vec<StringRecord>, spec: &FilterSpec) -> FilterResult {
    let data: Vec<StringRecord> = records
        .into_iter()
        .filter(|record| matches(record, spec))
        .collect();

    tracing::debug!(matched = data.len(), "filter applied");

    FilterResult {
        count: data.len(),
        filters_applied: spec.clone(),
        data,
    }
}

/// Conjunction of the five per-field predicates.
fn matches(record: &StringRecord, spec: &FilterSpec) -> bool {
    let props = &record.properties;

    if let Some(want) = spec.is_palindrome {
        if props.is_palindrome != want {
            return false;
        }
    }
    if let Some(min) = spec.min_length {
        if (props.length as i64) < min {
            return false;
        }
    }
    if let Some(max) = spec.max_length {
        if (props.length as i64) > max {
            return false;
        }
    }
    if let Some(count) = spec.word_count {
        if props.word_count as i64 != count {
            return false;
        }
    }
    if let Some(needle) = &spec.contains_character {
        // Record values are stored lower-cased; lower-case the needle for
        // case-insensitive containment.
        if !record.value.contains(&needle.to_lowercase()) {
            return false;
        }
    }

    true
}
