use searchsync_core::{OfferId, ProductId};

/// An offer record with an optional back-reference to one product.
///
/// The reference is an association, not ownership: deleting the product
/// detaches the offer, it does not delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    id: OfferId,
    name: String,
    product_ref: Option<ProductId>,
}

impl Offer {
    pub fn new(
        id: impl Into<OfferId>,
        name: impl Into<String>,
        product_ref: Option<ProductId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            product_ref,
        }
    }

    pub fn offer_id(&self) -> &OfferId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_ref(&self) -> Option<&ProductId> {
        self.product_ref.as_ref()
    }

    pub fn references(&self, product_id: &ProductId) -> bool {
        self.product_ref.as_ref() == Some(product_id)
    }

    /// Same offer with its product reference cleared.
    pub fn detached(mut self) -> Self {
        self.product_ref = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_clears_reference_only() {
        let offer = Offer::new("o1", "Red", Some(ProductId::new("p1")));
        assert!(offer.references(&ProductId::new("p1")));

        let detached = offer.detached();
        assert_eq!(detached.product_ref(), None);
        assert_eq!(detached.name(), "Red");
        assert_eq!(detached.offer_id(), &OfferId::new("o1"));
    }

    #[test]
    fn equality_includes_product_ref() {
        let a = Offer::new("o1", "Red", Some(ProductId::new("p1")));
        let b = Offer::new("o1", "Red", Some(ProductId::new("p2")));
        assert_ne!(a, b);
        assert_ne!(a.clone(), a.clone().detached());
        assert_eq!(a.clone(), a);
    }
}
