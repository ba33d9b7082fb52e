//! Shopee product API configuration.

use std::time::Duration;

/// Default product-detail endpoint.
pub const DEFAULT_API_URL: &str = "https://shopee.co.id/api/v4/item/get";

/// Default base for canonical product URLs.
pub const DEFAULT_SITE_URL: &str = "https://shopee.co.id";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Connection settings for the Shopee product API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopeeConfig {
    /// Product-detail endpoint, queried with `itemid` and `shopid`.
    pub api_url: String,
    /// Base of the public product pages.
    pub site_url: String,
    /// Upper bound on one request, connect to last byte.
    pub timeout: Duration,
}

impl Default for ShopeeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            site_url: DEFAULT_SITE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
