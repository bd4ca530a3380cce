use serde_json::Value;

use strq_types::FilterSpec;

use crate::error::FilterError;

/// Untyped filter input, exactly as the caller presented it.
///
/// Holds raw key/value pairs in arrival order: query-string parameters
/// come in as JSON strings, the NL adapter's output as whatever JSON the
/// model produced. Nothing is validated until [`coerce`] runs.
#[derive(Clone, Debug, Default)]
pub struct RawFilter {
    fields: Vec<(String, Value)>,
}

impl RawFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from query-string pairs; every value arrives as a string.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }

    /// Build from a parsed JSON object (the NL adapter path).
    pub fn from_json_object(object: serde_json::Map<String, Value>) -> Self {
        Self {
            fields: object.into_iter().collect(),
        }
    }

    /// First value presented for `key`, if any.
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys outside the five recognized fields, in arrival order.
    fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| !FilterSpec::FIELDS.contains(k))
    }
}

/// Coerce untyped input into a typed [`FilterSpec`].
///
/// Unknown keys abort before any field is examined. Fields are then
/// coerced in canonical order and the first failure aborts the whole
/// operation; the engine never sees a partially coerced spec.
///
/// Absence rules: a missing key, JSON `null`, and the literal string
/// `"null"` all mean "no constraint". An empty `contains_character`
/// string is also treated as absent.
pub fn coerce(raw: &RawFilter) -> Result<FilterSpec, FilterError> {
    if let Some(key) = raw.unknown_keys().next() {
        return Err(FilterError::UnknownParameter(key.to_string()));
    }

    Ok(FilterSpec {
        is_palindrome: coerce_bool("is_palindrome", raw.get("is_palindrome"))?,
        min_length: coerce_int("min_length", raw.get("min_length"))?,
        max_length: coerce_int("max_length", raw.get("max_length"))?,
        word_count: coerce_int("word_count", raw.get("word_count"))?,
        contains_character: coerce_substring("contains_character", raw.get("contains_character"))?,
    })
}

/// A value is absent when the key is missing, JSON null, or the literal
/// string "null" (the NL collaborator sometimes emits the latter).
fn absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s == "null",
        _ => false,
    }
}

fn coerce_bool(field: &'static str, value: Option<&Value>) -> Result<Option<bool>, FilterError> {
    if absent(value) {
        return Ok(None);
    }
    match value {
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) => match s.to_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(FilterError::boolean(field)),
        },
        _ => Err(FilterError::boolean(field)),
    }
}

fn coerce_int(field: &'static str, value: Option<&Value>) -> Result<Option<i64>, FilterError> {
    if absent(value) {
        return Ok(None);
    }
    match value {
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(FilterError::integer(field)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| FilterError::integer(field)),
        _ => Err(FilterError::integer(field)),
    }
}

fn coerce_substring(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, FilterError> {
    if absent(value) {
        return Ok(None);
    }
    match value {
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(FilterError::string(field)),
    }
}
