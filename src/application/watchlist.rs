//! Watchlist use cases behind the chat commands.

use std::sync::Arc;

use tracing::info;

use crate::domain::{ProductKey, ProductRecord, ProductSnapshot};
use crate::error::Result;
use crate::port::{ProductCatalog, WatchlistStore};

/// Result of trying to add a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was fetched, appended, and saved.
    Added(ProductSnapshot),
    /// A record with the same key is already watched; nothing was fetched.
    AlreadyPresent,
    /// The catalog had no data for the key; nothing was saved.
    NotFound,
}

/// One watched product as shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedProduct {
    pub name: String,
    pub last_known_stock: i64,
    pub url: String,
}

/// Add/list operations over the stored watchlist.
#[derive(Clone)]
pub struct WatchlistService {
    store: Arc<dyn WatchlistStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl WatchlistService {
    #[must_use]
    pub fn new(store: Arc<dyn WatchlistStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Fetch a product and append it to the watchlist.
    ///
    /// The watchlist is loaded before the fetch and saved after it, so a
    /// monitor save landing in between is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error only when saving the updated watchlist fails.
    pub async fn add(&self, key: ProductKey) -> Result<AddOutcome> {
        let mut watchlist = self.store.load();
        if watchlist.contains(key) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        let Some(snapshot) = self.catalog.fetch(key).await else {
            return Ok(AddOutcome::NotFound);
        };

        watchlist.push(ProductRecord::from_snapshot(key, &snapshot));
        self.store.save(&watchlist)?;

        info!(
            shop_id = key.shop_id,
            item_id = key.item_id,
            name = %snapshot.name,
            stock = snapshot.stock,
            "Product added to watchlist"
        );
        Ok(AddOutcome::Added(snapshot))
    }

    /// Every watched product with its stored stock, in watchlist order.
    #[must_use]
    pub fn list(&self) -> Vec<ListedProduct> {
        self.store
            .load()
            .iter()
            .map(|record| ListedProduct {
                name: record.name.clone(),
                last_known_stock: record.last_known_stock,
                url: self.catalog.product_url(record.key()),
            })
            .collect()
    }
}
