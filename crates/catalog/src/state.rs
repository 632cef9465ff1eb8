//! Plain in-memory catalog state.
//!
//! `CatalogState` is a complete [`EntityStore`] with no locking. It is the
//! state behind the infra crate's transactional store and the fake used by
//! unit tests here.
//!
//! Writes go straight to the maps. Between [`CatalogState::begin`] and
//! [`CatalogState::commit`] every write first records the prior value of the
//! entries it touches, so [`CatalogState::rollback`] can restore them. The
//! journal grows with the entries an event touches, never with the catalog.

use std::collections::HashMap;

use searchsync_core::{OfferId, ProductId};

use crate::offer::Offer;
use crate::product::Product;
use crate::store::{EntityStore, StoreError, StoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    products: HashMap<ProductId, Product>,
    offers: HashMap<OfferId, Offer>,
    /// Secondary index: product -> referencing offers, in association order.
    by_product: HashMap<ProductId, Vec<OfferId>>,
    /// `Some` while a transaction is open.
    journal: Option<Vec<Undo>>,
}

/// Prior value of one entry, `None` meaning it was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Undo {
    Product(ProductId, Option<Product>),
    Offer(OfferId, Option<Offer>),
    Index(ProductId, Option<Vec<OfferId>>),
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn offers(&self) -> impl Iterator<Item = &Offer> {
        self.offers.values()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn offer(&self, id: &OfferId) -> Option<&Offer> {
        self.offers.get(id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }

    /// Offers whose reference does not resolve to a stored product.
    ///
    /// Always empty unless the state was corrupted from outside the store API.
    pub fn dangling_offers(&self) -> Vec<&Offer> {
        self.offers
            .values()
            .filter(|o| {
                o.product_ref()
                    .is_some_and(|p| !self.products.contains_key(p))
            })
            .collect()
    }

    /// Start recording undo entries. Discards any journal left open.
    pub fn begin(&mut self) {
        self.journal = Some(Vec::new());
    }

    /// Keep every write since [`CatalogState::begin`].
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undo every write since [`CatalogState::begin`], newest first.
    pub fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Product(id, Some(product)) => {
                    self.products.insert(id, product);
                }
                Undo::Product(id, None) => {
                    self.products.remove(&id);
                }
                Undo::Offer(id, Some(offer)) => {
                    self.offers.insert(id, offer);
                }
                Undo::Offer(id, None) => {
                    self.offers.remove(&id);
                }
                Undo::Index(id, Some(ids)) => {
                    self.by_product.insert(id, ids);
                }
                Undo::Index(id, None) => {
                    self.by_product.remove(&id);
                }
            }
        }
    }

    fn save_product(&mut self, id: &ProductId) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(Undo::Product(id.clone(), self.products.get(id).cloned()));
        }
    }

    fn save_offer(&mut self, id: &OfferId) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(Undo::Offer(id.clone(), self.offers.get(id).cloned()));
        }
    }

    fn save_index(&mut self, id: &ProductId) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(Undo::Index(id.clone(), self.by_product.get(id).cloned()));
        }
    }

    fn unlink(&mut self, product_id: &ProductId, offer_id: &OfferId) {
        if let Some(ids) = self.by_product.get_mut(product_id) {
            ids.retain(|id| id != offer_id);
            if ids.is_empty() {
                self.by_product.remove(product_id);
            }
        }
    }
}

impl EntityStore for CatalogState {
    fn find_product(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        Ok(self.products.get(id).cloned())
    }

    fn upsert_product(&mut self, product: Product) -> StoreResult<()> {
        let id = product.product_id().clone();
        self.save_product(&id);
        self.products.insert(id, product);
        Ok(())
    }

    fn delete_product(&mut self, id: &ProductId) -> StoreResult<()> {
        if self.by_product.contains_key(id) {
            return Err(StoreError::integrity(format!(
                "product {id} is still referenced by offers"
            )));
        }
        if self.products.contains_key(id) {
            self.save_product(id);
            self.products.remove(id);
        }
        Ok(())
    }

    fn find_offer(&self, id: &OfferId) -> StoreResult<Option<Offer>> {
        Ok(self.offers.get(id).cloned())
    }

    fn upsert_offer(&mut self, offer: Offer) -> StoreResult<()> {
        if let Some(product_id) = offer.product_ref() {
            if !self.products.contains_key(product_id) {
                return Err(StoreError::integrity(format!(
                    "offer {} references unknown product {product_id}",
                    offer.offer_id()
                )));
            }
        }

        let previous_ref = self
            .offers
            .get(offer.offer_id())
            .and_then(|o| o.product_ref().cloned());

        self.save_offer(offer.offer_id());

        // Re-attaching to the same product keeps the offer's position.
        if previous_ref.as_ref() != offer.product_ref() {
            if let Some(previous) = &previous_ref {
                self.save_index(previous);
                self.unlink(previous, offer.offer_id());
            }
            if let Some(next) = offer.product_ref() {
                self.save_index(next);
                self.by_product
                    .entry(next.clone())
                    .or_default()
                    .push(offer.offer_id().clone());
            }
        }

        self.offers.insert(offer.offer_id().clone(), offer);
        Ok(())
    }

    fn delete_offer(&mut self, id: &OfferId) -> StoreResult<()> {
        let Some(product_ref) = self.offers.get(id).map(|o| o.product_ref().cloned()) else {
            return Ok(());
        };
        self.save_offer(id);
        self.offers.remove(id);
        if let Some(product_id) = product_ref {
            self.save_index(&product_id);
            self.unlink(&product_id, id);
        }
        Ok(())
    }

    fn find_offers_by_product(&self, id: &ProductId) -> StoreResult<Vec<Offer>> {
        let Some(ids) = self.by_product.get(id) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|offer_id| self.offers.get(offer_id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn names(offers: Vec<Offer>) -> Vec<String> {
        offers.into_iter().map(|o| o.name().to_owned()).collect()
    }

    #[test]
    fn offers_by_product_follow_association_order() {
        let mut state = CatalogState::new();
        state.upsert_product(Product::named("p1", "Phone")).unwrap();
        state.upsert_product(Product::named("p2", "Tablet")).unwrap();

        state.upsert_offer(Offer::new("o1", "A", Some(pid("p1")))).unwrap();
        state.upsert_offer(Offer::new("o3", "C", Some(pid("p2")))).unwrap();
        state.upsert_offer(Offer::new("o2", "B", Some(pid("p1")))).unwrap();

        // Moving o1 appends it behind o3.
        state.upsert_offer(Offer::new("o1", "A", Some(pid("p2")))).unwrap();

        assert_eq!(names(state.find_offers_by_product(&pid("p1")).unwrap()), ["B"]);
        assert_eq!(names(state.find_offers_by_product(&pid("p2")).unwrap()), ["C", "A"]);
    }

    #[test]
    fn renaming_in_place_keeps_position() {
        let mut state = CatalogState::new();
        state.upsert_product(Product::named("p1", "Phone")).unwrap();
        state.upsert_offer(Offer::new("o1", "A", Some(pid("p1")))).unwrap();
        state.upsert_offer(Offer::new("o2", "B", Some(pid("p1")))).unwrap();

        state.upsert_offer(Offer::new("o1", "A2", Some(pid("p1")))).unwrap();

        assert_eq!(names(state.find_offers_by_product(&pid("p1")).unwrap()), ["A2", "B"]);
    }

    #[test]
    fn rejects_offer_pointing_at_unknown_product() {
        let mut state = CatalogState::new();
        let err = state
            .upsert_offer(Offer::new("o1", "A", Some(pid("ghost"))))
            .unwrap_err();
        assert!(matches!(err, StoreError::Integrity(_)));
        assert_eq!(state.offer_count(), 0);
    }

    #[test]
    fn rejects_deleting_a_referenced_product() {
        let mut state = CatalogState::new();
        state.upsert_product(Product::named("p1", "Phone")).unwrap();
        state.upsert_offer(Offer::new("o1", "A", Some(pid("p1")))).unwrap();

        assert!(state.delete_product(&pid("p1")).is_err());

        state.upsert_offer(Offer::new("o1", "A", None)).unwrap();
        state.delete_product(&pid("p1")).unwrap();
        assert_eq!(state.product_count(), 0);
        assert!(state.dangling_offers().is_empty());
    }

    fn seeded() -> CatalogState {
        let mut state = CatalogState::new();
        state.upsert_product(Product::named("p1", "Phone")).unwrap();
        state.upsert_product(Product::named("p2", "Tablet")).unwrap();
        state.upsert_offer(Offer::new("o1", "A", Some(pid("p1")))).unwrap();
        state.upsert_offer(Offer::new("o2", "B", Some(pid("p1")))).unwrap();
        state.upsert_offer(Offer::new("o3", "C", Some(pid("p2")))).unwrap();
        state
    }

    #[test]
    fn rollback_restores_entries_and_association_order() {
        let mut state = seeded();
        let before = state.clone();

        state.begin();
        state.upsert_offer(Offer::new("o1", "A2", Some(pid("p2")))).unwrap();
        state.delete_offer(&OfferId::new("o2")).unwrap();
        state.delete_product(&pid("p1")).unwrap();
        state.upsert_product(Product::placeholder("p3")).unwrap();
        state.upsert_offer(Offer::new("o4", "D", Some(pid("p3")))).unwrap();
        state.rollback();

        assert_eq!(state, before);
        assert_eq!(names(state.find_offers_by_product(&pid("p1")).unwrap()), ["A", "B"]);
        assert_eq!(names(state.find_offers_by_product(&pid("p2")).unwrap()), ["C"]);
    }

    #[test]
    fn commit_keeps_writes() {
        let mut state = seeded();

        state.begin();
        state.delete_offer(&OfferId::new("o3")).unwrap();
        state.commit();
        state.rollback();

        assert_eq!(state.offer_count(), 2);
        assert!(state.find_offers_by_product(&pid("p2")).unwrap().is_empty());
    }

    #[test]
    fn journal_only_holds_touched_entries() {
        let mut state = CatalogState::new();
        for p in 0..200 {
            let product_id = format!("p{p}");
            state.upsert_product(Product::named(product_id.as_str(), "P")).unwrap();
            for o in 0..10 {
                state
                    .upsert_offer(Offer::new(format!("o{p}-{o}"), "O", Some(pid(&product_id))))
                    .unwrap();
            }
        }

        state.begin();
        state.delete_offer(&OfferId::new("missing")).unwrap();
        assert_eq!(state.journal.as_ref().map(Vec::len), Some(0));

        state.upsert_offer(Offer::new("o7-3", "O", Some(pid("p8")))).unwrap();
        // offer + old index + new index
        assert_eq!(state.journal.as_ref().map(Vec::len), Some(3));
        state.commit();
    }

    #[test]
    fn deleting_an_offer_unlinks_it() {
        let mut state = CatalogState::new();
        state.upsert_product(Product::named("p1", "Phone")).unwrap();
        state.upsert_offer(Offer::new("o1", "A", Some(pid("p1")))).unwrap();

        state.delete_offer(&OfferId::new("o1")).unwrap();
        state.delete_offer(&OfferId::new("o1")).unwrap();

        assert!(state.find_offers_by_product(&pid("p1")).unwrap().is_empty());
        state.delete_product(&pid("p1")).unwrap();
    }
}
