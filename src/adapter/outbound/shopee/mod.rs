//! Shopee marketplace integration.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::ShopeeClient;
pub use settings::ShopeeConfig;
