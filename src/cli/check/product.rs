use crate::adapter::outbound::shopee::ShopeeClient;
use crate::cli::output;
use crate::domain::{ProductKey, StockStatus};
use crate::infrastructure::config::Config;

/// Fetch one product and print its snapshot.
///
/// Returns `false` when the product could not be fetched.
pub async fn execute_product(config: &Config, key: ProductKey) -> bool {
    let client = ShopeeClient::from_config(&config.shopee);

    output::section(&format!("Product {key}"));

    match client.get_item(key).await {
        Ok(Some(snapshot)) => {
            output::key_value("Name", &snapshot.name);
            output::key_value("Stock", snapshot.stock);
            let status = match StockStatus::from_stock(snapshot.stock) {
                StockStatus::InStock(_) => "in stock",
                StockStatus::OutOfStock => "out of stock",
            };
            output::key_value("Status", status);
            output::key_value("URL", &snapshot.url);
            true
        }
        Ok(None) => {
            output::error("Product not found (check shop_id/item_id)");
            false
        }
        Err(e) => {
            output::error(&format!("Lookup failed: {e}"));
            false
        }
    }
}
