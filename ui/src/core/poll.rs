//! Cancellable interval for the wear-status poll.
//!
//! The wear view refreshes the status endpoint every 60 s while the state is
//! `wearing`. The loop is an explicitly constructed ticker with a separate
//! cancellation handle (no ambient `setInterval`-style singletons): cancelling
//! stops the loop within one tick, and dropping the handle cancels too, so a
//! torn-down view can't leave an orphaned timer behind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::timing;

pub const WEAR_POLL_INTERVAL_MS: u64 = 60_000;

/// Owner-side handle. Cancelled explicitly or on drop.
#[derive(Debug)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Loop-side ticker consumed by the polling coroutine.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    /// Wait one interval. Returns `false` (without sleeping) when already
    /// cancelled, and `false` after the sleep if cancellation landed during
    /// it. Either way no further work happens past one tick.
    pub async fn next_tick(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return false;
        }
        timing::sleep_ms(self.interval_ms).await;
        !self.cancelled.load(Ordering::Relaxed)
    }
}

pub fn ticker(interval_ms: u64) -> (Ticker, PollHandle) {
    let cancelled = Arc::new(AtomicBool::new(false));
    (
        Ticker {
            interval_ms,
            cancelled: cancelled.clone(),
        },
        PollHandle { cancelled },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_ticker_stops_without_sleeping() {
        let (tick, handle) = ticker(WEAR_POLL_INTERVAL_MS);
        handle.cancel();
        // Completes immediately: the pre-sleep check short-circuits.
        assert!(!futures::executor::block_on(tick.next_tick()));
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let (tick, handle) = ticker(10);
        drop(handle);
        assert!(!futures::executor::block_on(tick.next_tick()));
    }

    #[test]
    fn cancel_is_idempotent_and_observable() {
        let (_tick, handle) = ticker(10);
        assert!(!handle.is_cancelled());
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
    }
}
