//! Stock monitor: the polling loop that drives notifications.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::domain::StockChange;
use crate::port::{Clock, Event, Notifier, ProductCatalog, WatchlistStore};

/// Default delay between cycles, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Monitor loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Delay between the end of one cycle and the start of the next.
    pub interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
        }
    }
}

/// Counters for one pass over the watchlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Products fetched successfully.
    pub checked: usize,
    /// Products whose fetch came back absent.
    pub skipped: usize,
    /// Products whose stock moved (one notification each).
    pub changed: usize,
}

/// Re-checks every watched product on a fixed interval.
pub struct Monitor {
    store: Arc<dyn WatchlistStore>,
    catalog: Arc<dyn ProductCatalog>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    config: MonitorConfig,
}

impl Monitor {
    #[must_use]
    pub fn new(
        store: Arc<dyn WatchlistStore>,
        catalog: Arc<dyn ProductCatalog>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            notifier,
            clock,
            config,
        }
    }

    /// Announce startup, then poll forever.
    ///
    /// Never returns; the loop ends only when the task or process is dropped.
    pub async fn run(&self) {
        info!(
            interval_secs = self.config.interval.as_secs(),
            "Stock monitor started"
        );
        self.notifier.notify(Event::MonitorStarted);

        loop {
            let report = self.run_cycle().await;
            if report.changed > 0 {
                info!(
                    checked = report.checked,
                    skipped = report.skipped,
                    changed = report.changed,
                    "Monitor cycle complete"
                );
            } else {
                debug!(
                    checked = report.checked,
                    skipped = report.skipped,
                    "Monitor cycle complete, no changes"
                );
            }

            self.clock.sleep(self.config.interval).await;
        }
    }

    /// One pass: fetch every product, notify on stock moves, save once.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut watchlist = self.store.load();
        let mut report = CycleReport::default();

        for record in watchlist.iter_mut() {
            let key = record.key();
            let Some(snapshot) = self.catalog.fetch(key).await else {
                report.skipped += 1;
                continue;
            };
            report.checked += 1;

            let Some(change) = StockChange::detect(
                &snapshot.name,
                &snapshot.url,
                record.last_known_stock,
                snapshot.stock,
            ) else {
                continue;
            };

            info!(
                shop_id = key.shop_id,
                item_id = key.item_id,
                previous = change.previous,
                current = change.current,
                "Stock changed"
            );
            record.last_known_stock = change.current;
            self.notifier.notify(Event::StockChanged(change.into()));
            report.changed += 1;
        }

        if report.changed > 0 {
            if let Err(e) = self.store.save(&watchlist) {
                error!(error = %e, "Failed to save watchlist after stock changes");
            }
        }

        report
    }
}
