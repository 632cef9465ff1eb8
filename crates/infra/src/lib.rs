//! Infrastructure layer: transactional entity storage, dispatch, config.

pub mod config;
pub mod entity_store;
pub mod ingestion_dispatcher;


pub use config::{ConfigError, EngineConfig};
pub use entity_store::{InMemoryEntityStore, TransactionalStore};
pub use ingestion_dispatcher::{DispatchError, IngestionDispatcher};
