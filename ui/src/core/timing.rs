//! Timer and clock plumbing shared by the poll loop and the calculators.
//!
//! Sleeping is platform-split: `gloo-timers` on wasm, `tokio::time` on native.
//! Calculators never read the clock themselves; callers sample `now_utc` /
//! `today_utc` once and inject it, keeping the derivations pure.

use time::{Date, OffsetDateTime};

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}
