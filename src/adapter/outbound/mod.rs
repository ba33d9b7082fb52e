//! Outbound adapters (driven side).

pub mod clock;
pub mod notifier;
pub mod shopee;
pub mod store;
