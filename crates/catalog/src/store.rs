//! Entity store port.
//!
//! The derivation rules read and write products/offers only through this
//! trait. Implementations decide durability; atomicity across one event is
//! provided by whoever hands the rules a `&mut` store (see the infra crate's
//! transactional store).

use thiserror::Error;

use searchsync_core::{OfferId, ProductId};

use crate::offer::Offer;
use crate::product::Product;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A write would leave an offer pointing at a product that does not exist.
    #[error("referential integrity violated: {0}")]
    Integrity(String),

    /// The backend could not serve the request (poisoned lock, connection loss, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Keyed storage for products and offers.
pub trait EntityStore {
    fn find_product(&self, id: &ProductId) -> StoreResult<Option<Product>>;
    fn upsert_product(&mut self, product: Product) -> StoreResult<()>;
    fn delete_product(&mut self, id: &ProductId) -> StoreResult<()>;

    fn find_offer(&self, id: &OfferId) -> StoreResult<Option<Offer>>;
    fn upsert_offer(&mut self, offer: Offer) -> StoreResult<()>;
    fn delete_offer(&mut self, id: &OfferId) -> StoreResult<()>;

    /// Offers whose `product_ref` is `id`, in association order (the order in
    /// which each became attached to the product).
    fn find_offers_by_product(&self, id: &ProductId) -> StoreResult<Vec<Offer>>;
}

impl<S> EntityStore for &mut S
where
    S: EntityStore + ?Sized,
{
    fn find_product(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        (**self).find_product(id)
    }

    fn upsert_product(&mut self, product: Product) -> StoreResult<()> {
        (**self).upsert_product(product)
    }

    fn delete_product(&mut self, id: &ProductId) -> StoreResult<()> {
        (**self).delete_product(id)
    }

    fn find_offer(&self, id: &OfferId) -> StoreResult<Option<Offer>> {
        (**self).find_offer(id)
    }

    fn upsert_offer(&mut self, offer: Offer) -> StoreResult<()> {
        (**self).upsert_offer(offer)
    }

    fn delete_offer(&mut self, id: &OfferId) -> StoreResult<()> {
        (**self).delete_offer(id)
    }

    fn find_offers_by_product(&self, id: &ProductId) -> StoreResult<Vec<Offer>> {
        (**self).find_offers_by_product(id)
    }
}
