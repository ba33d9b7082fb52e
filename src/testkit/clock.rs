//! Clock that records requested delays and returns without sleeping.

use std::future::pending;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::port::Clock;

/// Returns immediately from the first `limit` sleeps, then parks forever.
///
/// Once the limit is reached [`exhausted`](Self::exhausted) resolves, which
/// lets a test stop an otherwise endless loop after a known number of cycles.
pub struct ScriptedClock {
    limit: usize,
    sleeps: Mutex<Vec<Duration>>,
    done: Notify,
}

impl ScriptedClock {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            sleeps: Mutex::new(Vec::new()),
            done: Notify::new(),
        }
    }

    /// Every delay requested so far.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("lock clock").clone()
    }

    /// Resolves once `limit` sleeps have been requested.
    pub async fn exhausted(&self) {
        self.done.notified().await;
    }
}

#[async_trait]
impl Clock for ScriptedClock {
    async fn sleep(&self, duration: Duration) {
        let count = {
            let mut sleeps = self.sleeps.lock().expect("lock clock");
            sleeps.push(duration);
            sleeps.len()
        };

        if count >= self.limit {
            self.done.notify_one();
            pending::<()>().await;
        }
        tokio::task::yield_now().await;
    }
}
