//! Ingestion events and index synchronization operations.
//!
//! - `request`: the loosely-typed shape events arrive in (every field optional)
//! - `validation`: turns a request into a typed [`IngestionEvent`] or a field error
//! - `event`: the closed set of typed events the engine derives operations from
//! - `operation`: what the engine emits for the external search index

pub mod event;
pub mod operation;
pub mod request;
pub mod validation;

pub use event::{DeleteOffer, DeleteProduct, IngestionEvent, UpsertOffer, UpsertProduct};
pub use operation::SyncOperation;
pub use request::IngestionRequest;
pub use validation::validate;
