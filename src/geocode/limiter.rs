//! Request pacing for the remote geocoder.
//!
//! A permit-bucket pacer: permits are replenished one at a time on a fixed
//! interval by a background task, and each remote dispatch consumes one.
//! Geocoder rate limits are quoted as inter-call delays (one request per
//! second and similar), so the pacer is parameterized by interval rather
//! than requests-per-second.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Interval-based request pacer.
///
/// # Behavior
///
/// - Starts with `burst` permits so the first dispatches go out immediately
/// - One permit is added per interval tick, capped at `burst`
/// - Permits are consumed on acquire, never returned
/// - The replenishment task shuts down via `CancellationToken`
pub struct RequestPacer {
    permits: Arc<Semaphore>,
    #[allow(dead_code)]
    capacity: usize,
    #[allow(dead_code)] // Held for the lifetime of the replenishment task
    shutdown: CancellationToken,
}

impl RequestPacer {
    /// Waits for and consumes one dispatch permit.
    ///
    /// If the semaphore is closed during shutdown the call returns without
    /// pacing rather than blocking forever.
    pub async fn acquire(&self) {
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

/// Initializes an interval-based request pacer.
///
/// Creates a pacer that spaces request dispatches at least `pacing_interval`
/// apart once the initial `burst` is spent. If `pacing_interval` is zero,
/// pacing is disabled and `None` is returned.
///
/// # Arguments
///
/// * `pacing_interval` - Minimum time between successive dispatches
/// * `burst` - Initial permit count (also the replenishment cap)
///
/// # Returns
///
/// A tuple of `(RequestPacer, CancellationToken)` if pacing is enabled, or
/// `None` if disabled. The cancellation token shuts down the background
/// replenishment task.
pub fn init_request_pacer(
    pacing_interval: Duration,
    burst: usize,
) -> Option<(Arc<RequestPacer>, CancellationToken)> {
    if pacing_interval.is_zero() {
        return None;
    }
    let capacity = burst.max(1);
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    let pacer = Arc::new(RequestPacer {
        permits: Arc::new(Semaphore::new(capacity)),
        capacity,
        shutdown: shutdown_clone.clone(),
    });

    let permits = pacer.permits.clone();
    let mut ticker = interval(pacing_interval);
    // The first tick fires immediately; skip it so the initial burst is the
    // only head start.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::spawn(async move {
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if permits.available_permits() < capacity {
                        permits.add_permits(1);
                    }
                }
                _ = shutdown_clone.cancelled() => {
                    log::debug!("Request pacer background task shutting down");
                    break;
                }
            }
        }
    });

    Some((pacer, shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_init_request_pacer_disabled() {
        let result = init_request_pacer(Duration::ZERO, 3);
        assert!(
            result.is_none(),
            "Pacer should be disabled for a zero interval"
        );
    }

    #[tokio::test]
    async fn test_pacer_burst_is_immediately_available() {
        let (pacer, _shutdown) = init_request_pacer(Duration::from_millis(200), 2).unwrap();

        for _ in 0..2 {
            let acquired = timeout(Duration::from_millis(20), pacer.acquire()).await;
            assert!(acquired.is_ok(), "Burst permits should be available immediately");
        }
    }

    #[tokio::test]
    async fn test_pacer_spaces_dispatches_after_burst() {
        let (pacer, _shutdown) = init_request_pacer(Duration::from_millis(150), 1).unwrap();

        pacer.acquire().await;

        // The next permit only appears after a replenishment tick
        let early = timeout(Duration::from_millis(30), pacer.acquire()).await;
        assert!(early.is_err(), "No permit should be available before the interval elapses");

        let replenished = timeout(Duration::from_millis(400), pacer.acquire()).await;
        assert!(replenished.is_ok(), "A permit should appear after the interval");
    }

    #[tokio::test]
    async fn test_pacer_replenishment_is_capped_at_burst() {
        let (pacer, _shutdown) = init_request_pacer(Duration::from_millis(100), 1).unwrap();

        // Let several ticks pass without consuming
        tokio::time::sleep(Duration::from_millis(350)).await;

        // Only one permit accumulated despite the idle ticks
        pacer.acquire().await;
        let extra = timeout(Duration::from_millis(10), pacer.acquire()).await;
        assert!(
            extra.is_err(),
            "Idle ticks must not accumulate permits beyond the burst cap"
        );
    }

    #[tokio::test]
    async fn test_pacer_shutdown_stops_replenishment() {
        let (pacer, shutdown) = init_request_pacer(Duration::from_millis(200), 1).unwrap();

        pacer.acquire().await;
        shutdown.cancel();
        tokio::time::sleep(Duration::from_millis(80)).await;

        // Replenishment stopped; no new permits appear
        let after = timeout(Duration::from_millis(30), pacer.acquire()).await;
        assert!(after.is_err(), "Cancelled pacer should stop issuing permits");
    }
}
