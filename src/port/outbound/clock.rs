//! Timer port used between monitor cycles.

use std::time::Duration;

use async_trait::async_trait;

/// Source of delays for the polling loop.
///
/// Production code sleeps on the Tokio timer; tests substitute a clock that
/// records requested delays and returns immediately.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}
