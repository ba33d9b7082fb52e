//! Configuration and connectivity checks.

mod config;
mod product;

pub use config::execute_config;
pub use product::execute_product;
