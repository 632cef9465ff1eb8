use std::sync::RwLock;

use searchsync_catalog::{CatalogState, StoreError};

use super::TransactionalStore;

/// In-memory transactional entity store.
///
/// Events are fully serialized by the write lock. A transaction writes in
/// place under the catalog's undo journal and rolls back on error, so a failed
/// event leaves no trace and the cost of one event does not depend on the
/// size of the catalog.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CatalogState) -> Self {
        Self {
            inner: RwLock::new(state),
        }
    }

    /// Point-in-time copy of the committed state.
    pub fn snapshot(&self) -> Result<CatalogState, StoreError> {
        self.inner
            .read()
            .map(|state| state.clone())
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }
}

impl TransactionalStore for InMemoryEntityStore {
    type Tx = CatalogState;

    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self::Tx) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        state.begin();
        match f(&mut *state) {
            Ok(out) => {
                state.commit();
                Ok(out)
            }
            Err(e) => {
                state.rollback();
                Err(e)
            }
        }
    }
}
