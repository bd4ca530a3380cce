use std::sync::RwLock;

use strq_types::StringRecord;

use crate::traits::RecordStore;

/// In-memory, `Vec`-backed record store.
///
/// The only storage backend StrQ ships. All records are held in memory
/// behind a `RwLock`; records are cloned on read so snapshots are immune
/// to later mutation. Linear scans are deliberate: the collection is
/// small and insertion order is part of the contract.
pub struct InMemoryStringStore {
    records: RwLock<Vec<StringRecord>>,
}

impl InMemoryStringStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryStringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStringStore {
    fn append(&self, record: StringRecord) {
        self.records.write().expect("lock poisoned").push(record);
    }

    fn find_by_value(&self, value: &str) -> Option<StringRecord> {
        let records = self.records.read().expect("lock poisoned");
        records.iter().find(|r| r.value == value).cloned()
    }

    fn find_by_id(&self, id: &str) -> Option<StringRecord> {
        let records = self.records.read().expect("lock poisoned");
        records.iter().find(|r| r.id == id).cloned()
    }

    fn remove_by_value(&self, value: &str) -> bool {
        let mut records = self.records.write().expect("lock poisoned");
        match records.iter().position(|r| r.value == value) {
            Some(idx) => {
                records.remove(idx);
                true
            }
            None => false,
        }
    }

    fn all(&self) -> Vec<StringRecord> {
        self.records.read().expect("lock poisoned").clone()
    }

    fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }
}

impl std::fmt::Debug for InMemoryStringStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStringStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use strq_types::{CharFrequencyMap, StringProperties};

    fn make_record(value: &str) -> StringRecord {
        let mut freq = CharFrequencyMap::new();
        for ch in value.chars().filter(|c| *c != ' ') {
            *freq.entry(ch).or_insert(0) += 1;
        }
        StringRecord {
            id: format!("{value}-id"),
            value: value.to_string(),
            properties: StringProperties {
                length: value.chars().count() as u64,
                is_palindrome: false,
                unique_characters: freq.len() as u64,
                word_count: 1,
                sha256_hash: format!("{value}-id"),
                character_frequency_map: freq,
            },
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn append_and_find_by_value() {
        let store = InMemoryStringStore::new();
        store.append(make_record("hello"));

        let found = store.find_by_value("hello").expect("should exist");
        assert_eq!(found.value, "hello");
        assert!(store.find_by_value("absent").is_none());
    }

    #[test]
    fn find_by_id() {
        let store = InMemoryStringStore::new();
        store.append(make_record("hello"));
        assert!(store.find_by_id("hello-id").is_some());
        assert!(store.find_by_id("other-id").is_none());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = InMemoryStringStore::new();
        store.append(make_record("first"));
        store.append(make_record("second"));
        store.append(make_record("third"));

        let values: Vec<String> = store.all().into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[test]
    fn snapshot_is_immune_to_later_mutation() {
        let store = InMemoryStringStore::new();
        store.append(make_record("kept"));

        let snapshot = store.all();
        store.append(make_record("later"));
        store.remove_by_value("kept");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].value, "kept");
    }

    #[test]
    fn remove_present_record() {
        let store = InMemoryStringStore::new();
        store.append(make_record("gone"));
        assert!(store.remove_by_value("gone")); // was present
        assert!(store.find_by_value("gone").is_none()); // now gone
        assert!(!store.remove_by_value("gone")); // second remove = false
    }

    #[test]
    fn remove_missing_record() {
        let store = InMemoryStringStore::new();
        assert!(!store.remove_by_value("never-added"));
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let store = InMemoryStringStore::new();
        store.append(make_record("a"));
        store.append(make_record("b"));
        store.append(make_record("c"));
        store.remove_by_value("b");

        let values: Vec<String> = store.all().into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["a", "c"]);
    }

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryStringStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.append(make_record("x"));
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryStringStore::new();
        store.append(make_record("a"));
        store.append(make_record("b"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStringStore::new());
        store.append(make_record("shared"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let found = store.find_by_value("shared").expect("should exist");
                    assert_eq!(found.value, "shared");
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryStringStore::new();
        store.append(make_record("x"));
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStringStore"));
        assert!(debug.contains("record_count"));
    }
}
