use searchsync_core::{EventKind, OfferId, ProductId};

/// Event: a product was created or renamed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertProduct {
    pub product_id: ProductId,
    pub product_name: String,
}

/// Event: a product was removed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProduct {
    pub product_id: ProductId,
}

/// Event: an offer was created, renamed, or (re)associated upstream.
///
/// `related_product_id == None` detaches the offer from any product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOffer {
    pub offer_id: OfferId,
    pub offer_name: String,
    pub related_product_id: Option<ProductId>,
}

/// Event: an offer was removed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOffer {
    pub offer_id: OfferId,
}

/// A validated ingestion event (closed variant set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionEvent {
    UpsertProduct(UpsertProduct),
    DeleteProduct(DeleteProduct),
    UpsertOffer(UpsertOffer),
    DeleteOffer(DeleteOffer),
}

impl IngestionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            IngestionEvent::UpsertProduct(_) => EventKind::UpsertProduct,
            IngestionEvent::DeleteProduct(_) => EventKind::DeleteProduct,
            IngestionEvent::UpsertOffer(_) => EventKind::UpsertOffer,
            IngestionEvent::DeleteOffer(_) => EventKind::DeleteOffer,
        }
    }
}

impl From<UpsertProduct> for IngestionEvent {
    fn from(value: UpsertProduct) -> Self {
        Self::UpsertProduct(value)
    }
}

impl From<DeleteProduct> for IngestionEvent {
    fn from(value: DeleteProduct) -> Self {
        Self::DeleteProduct(value)
    }
}

impl From<UpsertOffer> for IngestionEvent {
    fn from(value: UpsertOffer) -> Self {
        Self::UpsertOffer(value)
    }
}

impl From<DeleteOffer> for IngestionEvent {
    fn from(value: DeleteOffer) -> Self {
        Self::DeleteOffer(value)
    }
}
