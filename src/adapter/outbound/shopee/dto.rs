//! Shopee `item/get` response types.
//!
//! Example body (trimmed):
//! ```json
//! {"error": null, "data": {"itemid": 222, "shopid": 111, "name": "Widget", "stock": 10}}
//! ```

use serde::Deserialize;
use serde_json::Value;

/// Fallback product name when the payload has none.
pub const DEFAULT_PRODUCT_NAME: &str = "Produk";

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    #[serde(default)]
    pub data: Option<Value>,
}

/// Fields we read from the `data` object.
#[derive(Debug, Default, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl ItemResponse {
    /// Extract item details, or `None` when `data` is missing, null, or empty.
    ///
    /// A `data` object whose fields have unexpected types is also treated as
    /// absent.
    #[must_use]
    pub fn into_item(self) -> Option<ItemData> {
        match self.data? {
            Value::Object(map) if !map.is_empty() => {
                serde_json::from_value(Value::Object(map)).ok()
            }
            _ => None,
        }
    }
}

impl ItemData {
    #[must_use]
    pub fn name_or_default(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())
    }

    #[must_use]
    pub fn stock_or_default(&self) -> i64 {
        self.stock.unwrap_or(0)
    }
}
