use searchsync_core::ProductId;
use searchsync_events::SyncOperation;

use crate::offer::Offer;

/// A product record.
///
/// A product without a name is a *placeholder*: it was created because an
/// offer referenced it before its own upsert arrived. Placeholders are never
/// searchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: Option<String>,
}

impl Product {
    pub fn named(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    pub fn placeholder(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Rename (or promote a placeholder to a named product).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Searchable = named and referenced by at least one offer.
    ///
    /// Callers pass the *current* referencing-offer count; nothing is cached.
    pub fn is_searchable(&self, referencing_offers: usize) -> bool {
        self.is_named() && referencing_offers > 0
    }

    /// The index document for this product given its current offers, if it is
    /// searchable.
    ///
    /// `offers` must be the offers referencing this product, in association
    /// order.
    pub fn searchable_document(&self, offers: &[Offer]) -> Option<SyncOperation> {
        let name = self.name.as_deref()?;
        if !self.is_searchable(offers.len()) {
            return None;
        }
        Some(SyncOperation::upsert(
            self.id.clone(),
            name,
            offers.iter().map(|o| o.name().to_owned()),
        ))
    }
}
