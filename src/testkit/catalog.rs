//! Scripted product catalog.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::domain::{product_url, snapshot};
use crate::domain::{ProductKey, ProductSnapshot};
use crate::port::ProductCatalog;

/// Catalog answering from a fixed table; unknown keys are absent.
#[derive(Default)]
pub struct StubCatalog {
    products: Mutex<HashMap<ProductKey, (String, i64)>>,
    fetches: AtomicUsize,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, key: ProductKey, name: &str, stock: i64) -> Self {
        self.set_product(key, name, stock);
        self
    }

    pub fn set_product(&self, key: ProductKey, name: &str, stock: i64) {
        self.products
            .lock()
            .expect("lock catalog")
            .insert(key, (name.to_string(), stock));
    }

    /// Make `key` absent, as if the upstream call failed.
    pub fn remove(&self, key: ProductKey) {
        self.products.lock().expect("lock catalog").remove(&key);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductCatalog for StubCatalog {
    async fn fetch(&self, key: ProductKey) -> Option<ProductSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.products
            .lock()
            .expect("lock catalog")
            .get(&key)
            .map(|(name, stock)| snapshot(key, name, *stock))
    }

    fn product_url(&self, key: ProductKey) -> String {
        product_url(key)
    }
}
