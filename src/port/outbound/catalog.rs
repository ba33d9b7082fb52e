//! Product catalog port.
//!
//! Looks up the current name and stock of a product on the marketplace.

use async_trait::async_trait;

use crate::domain::{ProductKey, ProductSnapshot};

/// Read-only access to marketplace product details.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch one snapshot of the product.
    ///
    /// Every failure (transport fault, bad status, empty payload) maps to
    /// `None`; implementations log the cause and never return an error.
    async fn fetch(&self, key: ProductKey) -> Option<ProductSnapshot>;

    /// Canonical public URL of the product page.
    fn product_url(&self, key: ProductKey) -> String;
}
