//! In-memory watchlist store.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::Watchlist;
use crate::error::Result;
use crate::port::WatchlistStore;

/// Holds the watchlist in memory and counts writes.
#[derive(Default)]
pub struct MemoryStore {
    watchlist: Mutex<Watchlist>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(watchlist: impl Into<Watchlist>) -> Self {
        Self {
            watchlist: Mutex::new(watchlist.into()),
            ..Self::default()
        }
    }

    /// Current contents, bypassing `load`.
    pub fn snapshot(&self) -> Watchlist {
        self.watchlist.lock().expect("lock watchlist").clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }
}

impl WatchlistStore for MemoryStore {
    fn load(&self) -> Watchlist {
        self.snapshot()
    }

    fn save(&self, watchlist: &Watchlist) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk full").into());
        }
        *self.watchlist.lock().expect("lock watchlist") = watchlist.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
