//! Watched products and the watchlist that holds them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one Shopee listing: the seller's shop and the item inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductKey {
    pub shop_id: u64,
    pub item_id: u64,
}

impl ProductKey {
    #[must_use]
    pub const fn new(shop_id: u64, item_id: u64) -> Self {
        Self { shop_id, item_id }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.shop_id, self.item_id)
    }
}

/// A product on the watchlist with the last stock level we observed.
///
/// Field names and order match the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "shopid")]
    pub shop_id: u64,
    #[serde(rename = "itemid")]
    pub item_id: u64,
    #[serde(rename = "last_stock")]
    pub last_known_stock: i64,
    pub name: String,
}

impl ProductRecord {
    /// Create a record from a freshly fetched snapshot.
    #[must_use]
    pub fn from_snapshot(key: ProductKey, snapshot: &ProductSnapshot) -> Self {
        Self {
            shop_id: key.shop_id,
            item_id: key.item_id,
            last_known_stock: snapshot.stock,
            name: snapshot.name.clone(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> ProductKey {
        ProductKey::new(self.shop_id, self.item_id)
    }
}

/// Point-in-time view of a product as returned by one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub name: String,
    pub stock: i64,
    pub url: String,
}

/// Ordered collection of watched products, in insertion order.
///
/// Uniqueness by [`ProductKey`] is checked by callers before [`push`](Self::push);
/// the collection itself accepts whatever it is given (e.g. a hand-edited file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist(Vec<ProductRecord>);

impl Watchlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record with this key is already watched.
    #[must_use]
    pub fn contains(&self, key: ProductKey) -> bool {
        self.0.iter().any(|record| record.key() == key)
    }

    /// Append a record at the end.
    pub fn push(&mut self, record: ProductRecord) {
        self.0.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ProductRecord> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ProductRecord>> for Watchlist {
    fn from(records: Vec<ProductRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
