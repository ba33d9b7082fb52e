//! Shopee REST API client.
//!
//! One `GET item/get?itemid=..&shopid=..` per lookup. No retries: a failed
//! lookup is reported as absent and the caller tries again next cycle.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::ItemResponse;
use super::settings::ShopeeConfig;
use crate::domain::{ProductKey, ProductSnapshot};
use crate::error::Result;
use crate::port::outbound::catalog::ProductCatalog;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Shopee product-detail API.
pub struct ShopeeClient {
    http: HttpClient,
    api_url: String,
    site_url: String,
}

impl ShopeeClient {
    #[must_use]
    pub fn from_config(config: &ShopeeConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            api_url: config.api_url.clone(),
            site_url: config.site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch item details, surfacing transport and decode errors.
    ///
    /// Returns `Ok(None)` for a non-success status or an empty payload.
    pub async fn get_item(&self, key: ProductKey) -> Result<Option<ProductSnapshot>> {
        debug!(shop_id = key.shop_id, item_id = key.item_id, "Fetching product");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("itemid", key.item_id), ("shopid", key.shop_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                shop_id = key.shop_id,
                item_id = key.item_id,
                status = %status,
                "Product API returned non-success status"
            );
            return Ok(None);
        }

        let body: ItemResponse = response.json().await?;
        let Some(item) = body.into_item() else {
            debug!(
                shop_id = key.shop_id,
                item_id = key.item_id,
                "Product API returned no data"
            );
            return Ok(None);
        };

        Ok(Some(ProductSnapshot {
            name: item.name_or_default(),
            stock: item.stock_or_default(),
            url: self.product_url(key),
        }))
    }
}

#[async_trait]
impl ProductCatalog for ShopeeClient {
    async fn fetch(&self, key: ProductKey) -> Option<ProductSnapshot> {
        match self.get_item(key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    shop_id = key.shop_id,
                    item_id = key.item_id,
                    error = %e,
                    "Failed to fetch product from Shopee"
                );
                None
            }
        }
    }

    fn product_url(&self, key: ProductKey) -> String {
        format!("{}/product/{}/{}", self.site_url, key.shop_id, key.item_id)
    }
}
