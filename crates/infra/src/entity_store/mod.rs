//! Transactional entity storage.
//!
//! The derivation rules need every read and write of one event applied
//! atomically and in isolation from other events. `TransactionalStore` is the
//! seam that provides that: it lends a `&mut` [`EntityStore`] for the duration
//! of one closure and commits only if the closure succeeds.

pub mod in_memory;

use std::sync::Arc;

use searchsync_catalog::{EntityStore, StoreError};

pub use in_memory::InMemoryEntityStore;

pub trait TransactionalStore: Send + Sync {
    type Tx: EntityStore;

    /// Run `f` as one atomic unit. On `Err` nothing `f` wrote is visible.
    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self::Tx) -> Result<T, E>,
        E: From<StoreError>;
}

impl<S> TransactionalStore for Arc<S>
where
    S: TransactionalStore,
{
    type Tx = S::Tx;

    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self::Tx) -> Result<T, E>,
        E: From<StoreError>,
    {
        (**self).transaction(f)
    }
}
