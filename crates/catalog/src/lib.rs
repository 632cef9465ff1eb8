//! Catalog domain module: products, offers, and index derivation rules.
//!
//! This crate owns the association model between offers and products and the
//! rules that turn one ingestion event into index synchronization operations.
//! Storage is reached only through the [`EntityStore`] port.

pub mod derivation;
pub mod offer;
pub mod policy;
pub mod product;
pub mod state;
pub mod store;

pub use derivation::{Derivation, derive_operations};
pub use offer::Offer;
pub use policy::{OrphanPolicy, ParseOrphanPolicyError};
pub use product::Product;
pub use state::CatalogState;
pub use store::{EntityStore, StoreError, StoreResult};
