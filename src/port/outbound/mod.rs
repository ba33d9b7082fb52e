//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the product
//! catalog, watchlist storage, notifications, and the timer.

pub mod catalog;
pub mod clock;
pub mod notifier;
pub mod store;
