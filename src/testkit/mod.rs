//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`]: in-memory [`WatchlistStore`](crate::port::WatchlistStore)
//!   with save counting and injectable save failures.
//! - [`catalog`]: scripted [`ProductCatalog`](crate::port::ProductCatalog).
//! - [`notifier`]: event-recording [`Notifier`](crate::port::Notifier).
//! - [`clock`]: [`Clock`](crate::port::Clock) that records delays instead of sleeping.
//! - [`domain`]: builders for records and snapshots.

pub mod catalog;
pub mod clock;
pub mod domain;
pub mod notifier;
pub mod store;

pub use catalog::StubCatalog;
pub use clock::ScriptedClock;
pub use notifier::RecordingNotifier;
pub use store::MemoryStore;
