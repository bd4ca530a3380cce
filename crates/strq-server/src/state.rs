use std::sync::Arc;
use std::time::Duration;

use strq_analyze::RecordBuilder;
use strq_nl::{NlFilterAdapter, NlTranslator};
use strq_store::{InMemoryStringStore, RecordStore};

/// Shared application state: one store for the process lifetime, the
/// builder that ingests into it, and the NL adapter.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub builder: Arc<RecordBuilder>,
    pub adapter: Arc<NlFilterAdapter>,
    pub nl_timeout: Duration,
}

impl AppState {
    /// Fresh empty state around the given translator.
    pub fn new(translator: Arc<dyn NlTranslator>, nl_timeout: Duration) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStringStore::new());
        Self {
            builder: Arc::new(RecordBuilder::new(store.clone())),
            adapter: Arc::new(NlFilterAdapter::new(translator)),
            store,
            nl_timeout,
        }
    }
}
