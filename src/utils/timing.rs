//! Cross-platform async delay.
//!
//! Native builds sleep on the tokio timer; WASM builds go through the
//! browser timeout via gloo.

use std::time::Duration;

/// Suspends the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }

    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}
