//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  monitor + watchlist    ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog │            │   Store     │              │ Notifier  │
//! │ (Shopee)│            │ (JSON file) │              │ (Telegram)│
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::catalog::ProductCatalog;
pub use outbound::clock::Clock;
pub use outbound::notifier::{Event, Notifier, StockChangeEvent};
pub use outbound::store::WatchlistStore;
