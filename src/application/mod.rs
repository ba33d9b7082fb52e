//! Application services: the monitor loop and the watchlist use cases.

pub mod monitor;
pub mod watchlist;

pub use monitor::{CycleReport, Monitor, MonitorConfig};
pub use watchlist::{AddOutcome, ListedProduct, WatchlistService};
