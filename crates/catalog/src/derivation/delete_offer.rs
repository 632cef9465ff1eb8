use searchsync_events::{DeleteOffer, SyncOperation};

use super::Derivation;
use crate::store::{EntityStore, StoreResult};

impl<S> Derivation<'_, S>
where
    S: EntityStore + ?Sized,
{
    pub(super) fn handle_delete_offer(
        &mut self,
        event: &DeleteOffer,
    ) -> StoreResult<Vec<SyncOperation>> {
        let Some(offer) = self.store.find_offer(&event.offer_id)? else {
            return Ok(vec![]);
        };
        self.store.delete_offer(&event.offer_id)?;

        let Some(product_id) = offer.product_ref() else {
            return Ok(vec![]);
        };
        let Some(product) = self.store.find_product(product_id)? else {
            return Ok(vec![]);
        };

        Ok(self.after_offer_left(&product)?.into_iter().collect())
    }
}
