use std::sync::Arc;

use searchsync_catalog::CatalogState;
use searchsync_events::{IngestionRequest, SyncOperation};
use searchsync_infra::{
    DispatchError, EngineConfig, InMemoryEntityStore, IngestionDispatcher,
};

/// Engine wiring shared by all handlers.
#[derive(Debug)]
pub struct AppServices {
    dispatcher: IngestionDispatcher<Arc<InMemoryEntityStore>>,
}

impl AppServices {
    pub fn in_memory(config: EngineConfig) -> Self {
        let store = Arc::new(InMemoryEntityStore::new());
        Self {
            dispatcher: IngestionDispatcher::with_config(store, config),
        }
    }

    /// Blocks on the store lock; call from a blocking task, not a runtime worker.
    pub fn ingest(&self, request: &IngestionRequest) -> Result<Vec<SyncOperation>, DispatchError> {
        self.dispatcher.dispatch(request)
    }

    pub fn snapshot(&self) -> Option<CatalogState> {
        self.dispatcher.store().snapshot().ok()
    }
}
