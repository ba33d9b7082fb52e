//! Notifier port for monitor events.
//!
//! This module defines the trait for pushing monitor events (startup,
//! stock changes) to the admin chat.

use crate::domain::{StockChange, StockStatus};

/// Events that can trigger notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The monitor loop has started polling.
    MonitorStarted,
    /// A watched product's stock moved.
    StockChanged(StockChangeEvent),
}

/// Stock change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChangeEvent {
    /// Product name as returned by the latest fetch.
    pub name: String,
    /// Canonical product URL.
    pub url: String,
    /// Stock stored before this cycle.
    pub previous: i64,
    /// Stock returned by this cycle's fetch.
    pub current: i64,
}

impl StockChangeEvent {
    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.current)
    }
}

impl From<StockChange> for StockChangeEvent {
    fn from(change: StockChange) -> Self {
        Self {
            name: change.name,
            url: change.url,
            previous: change.previous,
            current: change.current,
        }
    }
}

/// Trait for notification handlers.
///
/// Notifications are fire-and-forget: `notify` must return quickly and
/// implementations that talk to the network hand the event to a background
/// task.
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}
