use std::sync::Arc;

use chrono::Utc;

use strq_store::RecordStore;
use strq_types::record::truncate_to_seconds;
use strq_types::StringRecord;

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::props::{derive_properties, normalize};

/// Builds analyzed records and appends them to the store.
///
/// The builder is the only ingest path: it normalizes the text, rejects
/// duplicates, derives every property, and appends. The append is its
/// only side effect. Uniqueness checking lives here rather than in the
/// store, under the single-logical-writer model.
pub struct RecordBuilder {
    store: Arc<dyn RecordStore>,
}

impl RecordBuilder {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Analyze `raw_text` and append the resulting record.
    ///
    /// Fails with [`AnalyzeError::DuplicateValue`] if a record with the
    /// same normalized value already exists; nothing is built or stored
    /// in that case.
    pub fn build(&self, raw_text: &str) -> AnalyzeResult<StringRecord> {
        let value = normalize(raw_text);

        if self.store.find_by_value(&value).is_some() {
            return Err(AnalyzeError::DuplicateValue(value));
        }

        let properties = derive_properties(&value);
        let record = StringRecord {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: truncate_to_seconds(Utc::now()),
        };

        self.store.append(record.clone());
        tracing::debug!(id = %record.id, length = record.properties.length, "record ingested");
        Ok(record)
    }
}
