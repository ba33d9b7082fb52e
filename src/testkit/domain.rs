//! Builders for domain primitives.

use crate::domain::{ProductKey, ProductRecord, ProductSnapshot};

/// Base URL used by [`StubCatalog`](super::StubCatalog) product links.
pub const SITE_URL: &str = "https://shopee.co.id";

pub fn product_url(key: ProductKey) -> String {
    format!("{SITE_URL}/product/{}/{}", key.shop_id, key.item_id)
}

pub fn record(shop_id: u64, item_id: u64, name: &str, stock: i64) -> ProductRecord {
    ProductRecord {
        shop_id,
        item_id,
        last_known_stock: stock,
        name: name.to_string(),
    }
}

pub fn snapshot(key: ProductKey, name: &str, stock: i64) -> ProductSnapshot {
    ProductSnapshot {
        name: name.to_string(),
        stock,
        url: product_url(key),
    }
}
