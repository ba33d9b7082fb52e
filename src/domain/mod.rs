//! Domain types for the watchlist and the stock changes it produces.

mod product;
mod stock;

pub use product::{ProductKey, ProductRecord, ProductSnapshot, Watchlist};
pub use stock::{StockChange, StockStatus};
