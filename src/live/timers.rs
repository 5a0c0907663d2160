//! Deferred invocation, platform-split.

/// Run `f` after `delay_ms`. Fire-and-forget; cancellation is handled by the
/// caller (the channel driver discards stale firings by generation).
#[cfg(target_arch = "wasm32")]
pub fn schedule(delay_ms: u32, f: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn schedule(delay_ms: u32, f: impl FnOnce() + Send + 'static) {
    tokio::spawn(async move {
        tokio::time::sleep(tokio::time::Duration::from_millis(u64::from(delay_ms))).await;
        f();
    });
}
