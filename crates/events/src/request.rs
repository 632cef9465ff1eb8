use serde::{Deserialize, Serialize};

/// A mutation event as received from upstream (before validation).
///
/// Every field is optional on the wire; which ones are required depends on
/// `operation` and is enforced by [`crate::validate`]. Unknown `operation`
/// strings are kept verbatim so they can be reported back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionRequest {
    pub operation: Option<String>,
    pub offer_id: Option<String>,
    pub offer_name: Option<String>,
    pub product_id: Option<String>,
    pub related_product_id: Option<String>,
    pub product_name: Option<String>,
}

impl IngestionRequest {
    pub fn upsert_product(product_id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            operation: Some("UPSERT_PRODUCT".to_string()),
            product_id: Some(product_id.into()),
            product_name: Some(product_name.into()),
            ..Self::default()
        }
    }

    pub fn delete_product(product_id: impl Into<String>) -> Self {
        Self {
            operation: Some("DELETE_PRODUCT".to_string()),
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }

    pub fn upsert_offer(
        offer_id: impl Into<String>,
        offer_name: impl Into<String>,
        related_product_id: Option<&str>,
    ) -> Self {
        Self {
            operation: Some("UPSERT_OFFER".to_string()),
            offer_id: Some(offer_id.into()),
            offer_name: Some(offer_name.into()),
            related_product_id: related_product_id.map(str::to_owned),
            ..Self::default()
        }
    }

    pub fn delete_offer(offer_id: impl Into<String>) -> Self {
        Self {
            operation: Some("DELETE_OFFER".to_string()),
            offer_id: Some(offer_id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_and_tolerates_missing_fields() {
        let req: IngestionRequest = serde_json::from_str(
            r#"{"operation":"UPSERT_OFFER","offerId":"o1","offerName":"Red","relatedProductId":"p1"}"#,
        )
        .unwrap();

        assert_eq!(req, IngestionRequest::upsert_offer("o1", "Red", Some("p1")));
        assert!(req.product_name.is_none());
    }

    #[test]
    fn explicit_null_is_absent() {
        let req: IngestionRequest =
            serde_json::from_str(r#"{"operation":"DELETE_PRODUCT","productId":null}"#).unwrap();
        assert_eq!(req.product_id, None);
    }
}
