//! Persistence port for the watchlist.

use crate::domain::Watchlist;
use crate::error::Result;

/// Whole-file storage for the watchlist.
///
/// There is no in-memory cache and no locking: every call goes to the
/// backing store, and concurrent read-modify-write cycles race with
/// last-writer-wins semantics.
pub trait WatchlistStore: Send + Sync {
    /// Read the full watchlist.
    ///
    /// A missing, unreadable, or malformed store yields an empty watchlist.
    fn load(&self) -> Watchlist;

    /// Overwrite the store with `watchlist`.
    fn save(&self, watchlist: &Watchlist) -> Result<()>;
}
