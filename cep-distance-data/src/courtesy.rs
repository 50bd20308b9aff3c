//! Pacing for rate-limited public services.

use std::future::Future;
use std::time::Duration;

/// Pause observed before each geocoding request.
pub const DEFAULT_COURTESY_DELAY: Duration = Duration::from_millis(500);

/// Wait `delay`, then drive `request` to completion.
///
/// `request` is not polled until the delay has elapsed, so no I/O starts
/// early.
pub async fn paced<F>(delay: Duration, request: F) -> F::Output
where
    F: Future,
{
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    request.await
}
