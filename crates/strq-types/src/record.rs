use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-character occurrence counts, iterated in first-occurrence order.
///
/// Spaces are excluded before counting, so `"ab ba"` yields
/// `{'a': 2, 'b': 2}` with `'a'` first.
pub type CharFrequencyMap = IndexMap<char, u64>;

/// An ingested string together with its derived properties.
///
/// Records are immutable once created: every field is a pure function of
/// the normalized `value` except `created_at`, which is fixed at ingest
/// time. Deletion removes a record wholesale; nothing ever mutates one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Lower-hex SHA-256 digest of `value`. Doubles as the external
    /// identifier; equal to `properties.sha256_hash`.
    pub id: String,
    /// The normalized (trimmed, lower-cased) text. Unique per store.
    pub value: String,
    /// Derived properties of `value`.
    pub properties: StringProperties,
    /// UTC creation time, second precision.
    #[serde(with = "second_utc")]
    pub created_at: DateTime<Utc>,
}

/// The derived property set of a [`StringRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character count of the normalized value (Unicode scalars, not bytes).
    pub length: u64,
    /// Whether the value equals its character-wise reverse.
    pub is_palindrome: bool,
    /// Count of distinct characters with spaces removed.
    pub unique_characters: u64,
    /// Token count from a strict single-space split. Consecutive spaces
    /// produce empty tokens that are counted as words.
    pub word_count: u64,
    /// Lower-hex SHA-256 digest of the value (same digest as the record id).
    pub sha256_hash: String,
    /// Per-character counts with spaces removed, first-occurrence order.
    pub character_frequency_map: CharFrequencyMap,
}

/// Serde adapter for second-precision UTC timestamps in the wire format
/// `YYYY-MM-DDTHH:MM:SSZ`.
pub mod second_utc {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(de)?;
        let naive = NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

/// Truncate a timestamp to whole seconds.
///
/// Applied at record creation so that `created_at` round-trips exactly
/// through the second-precision wire format.
pub fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(dt.timestamp(), 0).unwrap_or(dt)
}
