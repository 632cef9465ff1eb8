use searchsync_events::{SyncOperation, UpsertOffer};

use super::Derivation;
use crate::offer::Offer;
use crate::product::Product;
use crate::store::{EntityStore, StoreResult};

impl<S> Derivation<'_, S>
where
    S: EntityStore + ?Sized,
{
    /// Only the offer's previous product and its new one can change, so both
    /// are re-derived from the store after the offer is written.
    pub(super) fn handle_upsert_offer(
        &mut self,
        event: &UpsertOffer,
    ) -> StoreResult<Vec<SyncOperation>> {
        let requested = Offer::new(
            event.offer_id.clone(),
            event.offer_name.clone(),
            event.related_product_id.clone(),
        );

        let existing = self.store.find_offer(&event.offer_id)?;
        if existing.as_ref() == Some(&requested) {
            tracing::debug!(offer_id = %event.offer_id, "offer unchanged");
            return Ok(vec![]);
        }

        // Renaming in place is not a departure.
        let left_product = existing
            .and_then(|o| o.product_ref().cloned())
            .filter(|old| event.related_product_id.as_ref() != Some(old));

        let target = match &event.related_product_id {
            None => None,
            Some(product_id) => match self.store.find_product(product_id)? {
                Some(product) => Some(product),
                None => {
                    tracing::debug!(product_id = %product_id, "creating placeholder product");
                    let placeholder = Product::placeholder(product_id.clone());
                    self.store.upsert_product(placeholder.clone())?;
                    Some(placeholder)
                }
            },
        };

        self.store.upsert_offer(requested)?;

        let mut operations = Vec::with_capacity(2);

        if let Some(old_id) = left_product {
            if let Some(old) = self.store.find_product(&old_id)? {
                operations.extend(self.after_offer_left(&old)?);
            }
        }

        if let Some(target) = target {
            operations.extend(self.current_document(&target)?);
        }

        Ok(operations)
    }
}
