//! Ingestion pipeline (application-level orchestration).
//!
//! ```text
//! IngestionRequest
//!   ↓
//! 1. Validate (pure; rejects before any store access)
//!   ↓
//! 2. Open one store transaction
//!   ↓
//! 3. Route to the derivation rule for the event kind
//!   ↓
//! 4. Commit on success, discard on error
//!   ↓
//! Vec<SyncOperation>
//! ```
//!
//! The dispatcher never delivers operations anywhere; it returns them.

use thiserror::Error;

use searchsync_catalog::{StoreError, derive_operations};
use searchsync_core::{DomainError, EventKind, IngestionId};
use searchsync_events::{IngestionEvent, IngestionRequest, SyncOperation, validate};

use crate::config::EngineConfig;
use crate::entity_store::TransactionalStore;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required field is absent (or an identifier is empty). Nothing was written.
    #[error("{0}")]
    Validation(DomainError),

    /// The request named an operation kind the engine does not handle.
    #[error("Incorrect operation: {kind}")]
    UnsupportedOperation { kind: String },

    /// The store failed; the transaction was discarded.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<DomainError> for DispatchError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::UnsupportedOperation { kind } => DispatchError::UnsupportedOperation { kind },
            other => DispatchError::Validation(other),
        }
    }
}

impl DispatchError {
    /// The field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DispatchError::Validation(e) => e.field(),
            _ => None,
        }
    }

    /// The event kind a validation failure was reported for, if known.
    pub fn event_kind(&self) -> Option<EventKind> {
        match self {
            DispatchError::Validation(DomainError::MissingField { event_kind, .. }) => {
                Some(*event_kind)
            }
            _ => None,
        }
    }
}

/// Validates requests and runs the matching derivation rule transactionally.
#[derive(Debug)]
pub struct IngestionDispatcher<S> {
    store: S,
    config: EngineConfig,
}

impl<S> IngestionDispatcher<S>
where
    S: TransactionalStore,
{
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `request` and derive its index operations.
    pub fn dispatch(&self, request: &IngestionRequest) -> Result<Vec<SyncOperation>, DispatchError> {
        let event = validate(request).map_err(|e| {
            tracing::warn!(operation = ?request.operation, "rejected ingestion request: {e}");
            DispatchError::from(e)
        })?;
        self.dispatch_event(&event)
    }

    /// Derive index operations for an already-validated event.
    pub fn dispatch_event(&self, event: &IngestionEvent) -> Result<Vec<SyncOperation>, DispatchError> {
        let ingestion_id = IngestionId::new();
        let span = tracing::info_span!("ingest", %ingestion_id, kind = %event.kind());
        let _guard = span.enter();

        let policy = self.config.orphan_policy;
        let operations = self
            .store
            .transaction(|tx| derive_operations(tx, event, policy))
            .inspect_err(|e| tracing::error!("ingestion aborted: {e}"))?;

        tracing::info!(operations = operations.len(), "derived index operations");
        Ok(operations)
    }
}
