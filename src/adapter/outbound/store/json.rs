//! Watchlist stored as one pretty-printed JSON array on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::Watchlist;
use crate::error::Result;
use crate::port::outbound::store::WatchlistStore;

/// Default watchlist file, relative to the working directory.
pub const DEFAULT_PRODUCTS_FILE: &str = "products.json";

/// File-backed [`WatchlistStore`].
///
/// `save` truncates and rewrites the file in place. There is no temp file,
/// rename, or backup, so a crash mid-write can leave a truncated file, which
/// then loads as an empty watchlist.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchlistStore for JsonFileStore {
    fn load(&self) -> Watchlist {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Watchlist file not found, starting empty");
                return Watchlist::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read watchlist file");
                return Watchlist::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Watchlist file is not valid JSON");
            Watchlist::new()
        })
    }

    fn save(&self, watchlist: &Watchlist) -> Result<()> {
        let json = serde_json::to_string_pretty(watchlist)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), products = watchlist.len(), "Saved watchlist");
        Ok(())
    }
}
