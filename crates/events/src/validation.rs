//! Request validation (pure, no store access).
//!
//! Required fields per kind, checked in order; the first absent one is reported:
//!
//! | Kind           | Required                 |
//! |----------------|--------------------------|
//! | UPSERT_PRODUCT | productId, productName   |
//! | DELETE_PRODUCT | productId                |
//! | UPSERT_OFFER   | offerId, offerName       |
//! | DELETE_OFFER   | offerId                  |
//!
//! Identifiers must also be non-empty. `relatedProductId` is optional, but an
//! empty one is rejected rather than silently treated as a detach.

use searchsync_core::{DomainError, DomainResult, EventKind, OfferId, ProductId};

use crate::event::{DeleteOffer, DeleteProduct, IngestionEvent, UpsertOffer, UpsertProduct};
use crate::request::IngestionRequest;

/// Validate a request and produce the typed event it describes.
pub fn validate(request: &IngestionRequest) -> DomainResult<IngestionEvent> {
    let kind: EventKind = request
        .operation
        .as_deref()
        .ok_or(DomainError::MissingOperation)?
        .parse()?;

    let event: IngestionEvent = match kind {
        EventKind::UpsertProduct => UpsertProduct {
            product_id: ProductId::new(required_id("productId", &request.product_id, kind)?),
            product_name: required("productName", &request.product_name, kind)?.to_owned(),
        }
        .into(),
        EventKind::DeleteProduct => DeleteProduct {
            product_id: ProductId::new(required_id("productId", &request.product_id, kind)?),
        }
        .into(),
        EventKind::UpsertOffer => UpsertOffer {
            offer_id: OfferId::new(required_id("offerId", &request.offer_id, kind)?),
            offer_name: required("offerName", &request.offer_name, kind)?.to_owned(),
            related_product_id: optional_id("relatedProductId", &request.related_product_id, kind)?
                .map(ProductId::new),
        }
        .into(),
        EventKind::DeleteOffer => DeleteOffer {
            offer_id: OfferId::new(required_id("offerId", &request.offer_id, kind)?),
        }
        .into(),
    };

    Ok(event)
}

impl TryFrom<&IngestionRequest> for IngestionEvent {
    type Error = DomainError;

    fn try_from(value: &IngestionRequest) -> Result<Self, Self::Error> {
        validate(value)
    }
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
    kind: EventKind,
) -> DomainResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| DomainError::missing_field(field, kind))
}

fn required_id<'a>(
    field: &'static str,
    value: &'a Option<String>,
    kind: EventKind,
) -> DomainResult<&'a str> {
    match required(field, value, kind)? {
        "" => Err(DomainError::missing_field(field, kind)),
        id => Ok(id),
    }
}

fn optional_id<'a>(
    field: &'static str,
    value: &'a Option<String>,
    kind: EventKind,
) -> DomainResult<Option<&'a str>> {
    match value.as_deref() {
        None => Ok(None),
        Some("") => Err(DomainError::missing_field(field, kind)),
        Some(id) => Ok(Some(id)),
    }
}
