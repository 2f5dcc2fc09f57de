//! Monotonic millisecond clock used for click throttling.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static ORIGIN: Instant = Instant::now();
}

/// Milliseconds elapsed on a monotonic clock.
///
/// Browsers read `performance.now()`; the wall clock is only a fallback when the Performance API
/// is unavailable. Native targets measure from a thread-local [`Instant`] origin.
pub(crate) fn monotonic_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now);
        now.max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ORIGIN.with(|origin| origin.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_goes_backwards() {
        let first = monotonic_ms();
        let second = monotonic_ms();
        assert!(second >= first);
    }
}
