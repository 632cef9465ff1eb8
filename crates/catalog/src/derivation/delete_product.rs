use searchsync_events::{DeleteProduct, SyncOperation};

use super::Derivation;
use crate::store::{EntityStore, StoreResult};

impl<S> Derivation<'_, S>
where
    S: EntityStore + ?Sized,
{
    pub(super) fn handle_delete_product(
        &mut self,
        event: &DeleteProduct,
    ) -> StoreResult<Vec<SyncOperation>> {
        let product_id = &event.product_id;
        if self.store.find_product(product_id)?.is_none() {
            return Ok(vec![]);
        }

        let offers = self.offers_of(product_id)?;
        for offer in &offers {
            self.store.upsert_offer(offer.clone().detached())?;
        }
        self.store.delete_product(product_id)?;

        tracing::debug!(product_id = %product_id, detached = offers.len(), "product deleted");

        if offers.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![SyncOperation::delete(product_id.clone())])
        }
    }
}
