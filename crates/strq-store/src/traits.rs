use strq_types::StringRecord;

/// Ordered collection of analyzed string records.
///
/// All implementations must satisfy these invariants:
/// - `append` adds at the end; insertion order is what `all()` reports.
/// - Uniqueness of `value` is NOT enforced here. The record builder checks
///   `find_by_value` before appending; the store stays a dumb collection.
/// - Lookups and snapshots return clones. A snapshot taken by `all()` is
///   never affected by later mutation.
/// - Any single read observes a consistent state relative to an in-flight
///   write — no torn records.
pub trait RecordStore: Send + Sync {
    /// Append a record at the end. The caller has already verified that no
    /// record with the same normalized value exists.
    fn append(&self, record: StringRecord);

    /// Look up a record by its normalized value.
    fn find_by_value(&self, value: &str) -> Option<StringRecord>;

    /// Look up a record by its content-hash identifier (lower-hex).
    fn find_by_id(&self, id: &str) -> Option<StringRecord>;

    /// Remove the record with the given normalized value. Returns `true`
    /// if a record was removed.
    fn remove_by_value(&self, value: &str) -> bool;

    /// Snapshot of all records in insertion order.
    fn all(&self) -> Vec<StringRecord>;

    /// Number of records currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
