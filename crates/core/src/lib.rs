//! `searchsync-core`: shared vocabulary for the synchronization engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the closed set of ingestion kinds, and the domain error model.

pub mod error;
pub mod id;
pub mod kind;

pub use error::{DomainError, DomainResult};
pub use id::{IngestionId, OfferId, ProductId};
pub use kind::EventKind;
