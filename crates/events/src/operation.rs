use serde::{Deserialize, Serialize};

use searchsync_core::ProductId;

/// An instruction for the external search index.
///
/// The engine only computes these; delivering them is the caller's concern.
/// Serialized with an `operationType` tag:
///
/// ```json
/// {"operationType":"UPSERT_SEARCHABLE_PRODUCT","productId":"p1","productName":"Phone","offerNames":["Red"]}
/// {"operationType":"DELETE_SEARCHABLE_PRODUCT","productId":"p1"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operationType")]
pub enum SyncOperation {
    /// (Re)index a searchable product with its complete offer-name list.
    #[serde(rename = "UPSERT_SEARCHABLE_PRODUCT", rename_all = "camelCase")]
    Upsert {
        product_id: ProductId,
        product_name: String,
        offer_names: Vec<String>,
    },

    /// Retract a product that is no longer searchable.
    #[serde(rename = "DELETE_SEARCHABLE_PRODUCT", rename_all = "camelCase")]
    Delete { product_id: ProductId },
}

impl SyncOperation {
    pub fn upsert(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        offer_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Upsert {
            product_id: product_id.into(),
            product_name: product_name.into(),
            offer_names: offer_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delete(product_id: impl Into<ProductId>) -> Self {
        Self::Delete {
            product_id: product_id.into(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        match self {
            SyncOperation::Upsert { product_id, .. } | SyncOperation::Delete { product_id } => {
                product_id
            }
        }
    }

    pub fn is_upsert(&self) -> bool {
        matches!(self, SyncOperation::Upsert { .. })
    }

    pub fn operation_type(&self) -> &'static str {
        match self {
            SyncOperation::Upsert { .. } => "UPSERT_SEARCHABLE_PRODUCT",
            SyncOperation::Delete { .. } => "DELETE_SEARCHABLE_PRODUCT",
        }
    }
}
