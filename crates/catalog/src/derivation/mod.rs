//! Event → index operation derivation rules.
//!
//! One rule per event kind, each in its own file:
//!
//! - `upsert_product`: create/rename/promote, re-index if it has offers
//! - `delete_product`: detach offers, retract if it was indexed
//! - `upsert_offer`: recompute the (at most two) affected products
//! - `delete_offer`: refresh or retract the offer's product
//!
//! Rules read and write through the [`EntityStore`] they are handed and never
//! cache derived state: searchability is recomputed from the store each time.
//! A rule either returns its operations or a [`StoreError`]; the caller is
//! expected to discard the transaction on error.

mod delete_offer;
mod delete_product;
mod upsert_offer;
mod upsert_product;


use searchsync_core::ProductId;
use searchsync_events::{IngestionEvent, SyncOperation};

use crate::offer::Offer;
use crate::policy::OrphanPolicy;
use crate::product::Product;
use crate::store::{EntityStore, StoreResult};

/// Derivation context: a store to work against and the orphan policy.
pub struct Derivation<'s, S: ?Sized> {
    store: &'s mut S,
    policy: OrphanPolicy,
}

impl<'s, S> Derivation<'s, S>
where
    S: EntityStore + ?Sized,
{
    pub fn new(store: &'s mut S, policy: OrphanPolicy) -> Self {
        Self { store, policy }
    }

    /// Route an event to its rule.
    pub fn handle(&mut self, event: &IngestionEvent) -> StoreResult<Vec<SyncOperation>> {
        match event {
            IngestionEvent::UpsertProduct(e) => self.handle_upsert_product(e),
            IngestionEvent::DeleteProduct(e) => self.handle_delete_product(e),
            IngestionEvent::UpsertOffer(e) => self.handle_upsert_offer(e),
            IngestionEvent::DeleteOffer(e) => self.handle_delete_offer(e),
        }
    }

    fn offers_of(&self, product_id: &ProductId) -> StoreResult<Vec<Offer>> {
        self.store.find_offers_by_product(product_id)
    }

    /// Current index document for `product`, if it is searchable right now.
    fn current_document(&self, product: &Product) -> StoreResult<Option<SyncOperation>> {
        let offers = self.offers_of(product.product_id())?;
        Ok(product.searchable_document(&offers))
    }

    /// Re-derive a product that has just lost an offer (already persisted).
    ///
    /// A named product is refreshed with its remaining offers, or retracted
    /// when none remain. A placeholder yields nothing. Either way an orphaned
    /// record is purged under [`OrphanPolicy::Purge`].
    fn after_offer_left(&mut self, product: &Product) -> StoreResult<Option<SyncOperation>> {
        let product_id = product.product_id();
        let remaining = self.offers_of(product_id)?;

        let op = match (product.is_named(), remaining.is_empty()) {
            (false, _) => None,
            (true, true) => Some(SyncOperation::delete(product_id.clone())),
            (true, false) => product.searchable_document(&remaining),
        };

        if remaining.is_empty() && self.policy == OrphanPolicy::Purge {
            tracing::debug!(product_id = %product_id, named = product.is_named(), "purging orphaned product");
            self.store.delete_product(product_id)?;
        }

        Ok(op)
    }
}

/// Derive (and persist) the outcome of one validated event.
pub fn derive_operations<S>(
    store: &mut S,
    event: &IngestionEvent,
    policy: OrphanPolicy,
) -> StoreResult<Vec<SyncOperation>>
where
    S: EntityStore + ?Sized,
{
    Derivation::new(store, policy).handle(event)
}
