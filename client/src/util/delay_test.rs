#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn after_returns_pending_handle() {
    let handle = after(Duration::from_millis(600), || {});
    assert!(handle.is_pending());
}

#[test]
fn cancel_clears_pending() {
    let handle = after(Duration::from_millis(600), || {});
    handle.cancel();
    assert!(!handle.is_pending());
}

#[test]
fn claim_succeeds_once() {
    let handle = after(Duration::from_millis(10), || {});
    assert!(handle.claim());
    assert!(!handle.claim());
    assert!(!handle.is_pending());
}

#[test]
fn claim_fails_after_cancel() {
    let handle = after(Duration::from_millis(10), || {});
    let clone = handle.clone();
    clone.cancel();
    assert!(!handle.claim());
}

#[test]
fn cancel_all_cancels_every_handle() {
    let handles = vec![after(Duration::from_secs(1), || {}), after(Duration::from_secs(2), || {})];
    cancel_all(&handles);
    assert!(handles.iter().all(|h| !h.is_pending()));
}
