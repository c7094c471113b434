//! Cancellable fixed-delay actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration and approval submit both flip UI state after a fixed delay
//! and then navigate away. Each delay is owned by a `DelayHandle` that the
//! page cancels on cleanup, so a timer never fires into a torn-down view.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Handle for one pending delayed action.
#[derive(Clone, Debug)]
pub struct DelayHandle {
    pending: Arc<AtomicBool>,
}

impl DelayHandle {
    /// Cancel the action if it has not fired yet.
    pub fn cancel(&self) {
        self.pending.store(false, Ordering::Relaxed);
    }

    /// True until the action fires or is cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }

    /// Claim the right to fire. Returns `false` if cancelled or already fired.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn claim(&self) -> bool {
        self.pending.swap(false, Ordering::Relaxed)
    }
}

/// Run `action` once after `delay` unless the returned handle is cancelled.
///
/// Only the hydrated browser build schedules timers; on the server the
/// action is never run.
pub fn after<F>(delay: Duration, action: F) -> DelayHandle
where
    F: FnOnce() + 'static,
{
    let handle = DelayHandle { pending: Arc::new(AtomicBool::new(true)) };
    #[cfg(feature = "hydrate")]
    {
        let task_handle = handle.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if task_handle.claim() {
                action();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, action);
    }
    handle
}

/// Cancel every handle in `handles`.
pub fn cancel_all(handles: &[DelayHandle]) {
    for handle in handles {
        handle.cancel();
    }
}
