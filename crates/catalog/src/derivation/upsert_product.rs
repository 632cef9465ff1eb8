use searchsync_events::{SyncOperation, UpsertProduct};

use super::Derivation;
use crate::product::Product;
use crate::store::{EntityStore, StoreResult};

impl<S> Derivation<'_, S>
where
    S: EntityStore + ?Sized,
{
    pub(super) fn handle_upsert_product(
        &mut self,
        event: &UpsertProduct,
    ) -> StoreResult<Vec<SyncOperation>> {
        let existing = self.store.find_product(&event.product_id)?;

        if existing
            .as_ref()
            .is_some_and(|p| p.name() == Some(event.product_name.as_str()))
        {
            tracing::debug!(product_id = %event.product_id, "product unchanged");
            return Ok(vec![]);
        }

        // Creates, renames, or promotes a placeholder.
        let product = match existing {
            Some(p) => p.with_name(event.product_name.clone()),
            None => Product::named(event.product_id.clone(), event.product_name.clone()),
        };
        self.store.upsert_product(product.clone())?;

        Ok(self.current_document(&product)?.into_iter().collect())
    }
}
