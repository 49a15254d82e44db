//! Unit tests for the asynchronous Optional combinators.
//!
//! The async surface mirrors each synchronous operation with suspendable
//! computations. Tests cover:
//! - Variant dispatch (only one branch's computation is awaited)
//! - Suspension inside caller-supplied computations
//! - Deferral guarantees (the skipped branch is never invoked)
//! - Capture helpers (capture_async, capture_blocking)

#![cfg(all(feature = "control", feature = "async"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use maybars::control::Optional;
use rstest::rstest;

// =============================================================================
// Select
// =============================================================================

#[rstest]
#[tokio::test]
async fn select_async_transforms_present() {
    let result = Optional::present(21).select_async(|x| async move { x * 2 }).await;
    assert_eq!(result, Optional::present(42));
}

#[rstest]
#[tokio::test]
async fn select_async_propagates_absent_without_invoking() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);

    let result = Optional::<i32>::absent()
        .select_async(|x| {
            flag.store(true, Ordering::SeqCst);
            async move { x * 2 }
        })
        .await;

    assert_eq!(result, Optional::absent());
    assert!(!invoked.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn select_async_supports_suspension() {
    let result = Optional::present(21)
        .select_async(|x| async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            x * 2
        })
        .await;
    assert_eq!(result, Optional::present(42));
}

#[rstest]
#[tokio::test]
async fn select_or_else_async_substitutes_on_absent() {
    let substituted = Optional::<i32>::absent()
        .select_or_else_async(|x| async move { x + 1 }, || async { 0 })
        .await;
    assert_eq!(substituted, Optional::present(0));
}

#[rstest]
#[tokio::test]
async fn select_or_else_async_maps_on_present() {
    let result = Optional::present(10)
        .select_or_else_async(|x| async move { x + 1 }, || async { 0 })
        .await;
    assert_eq!(result, Optional::present(11));
}

// =============================================================================
// SelectMany
// =============================================================================

#[rstest]
#[tokio::test]
async fn select_many_async_binds_present() {
    let result = Optional::present(8)
        .select_many_async(|x| async move {
            if x % 2 == 0 {
                Optional::present(x / 2)
            } else {
                Optional::absent()
            }
        })
        .await;
    assert_eq!(result, Optional::present(4));
}

#[rstest]
#[tokio::test]
async fn select_many_async_can_yield_absent() {
    let result = Optional::present(3)
        .select_many_async(|x| async move {
            if x % 2 == 0 {
                Optional::present(x / 2)
            } else {
                Optional::absent()
            }
        })
        .await;
    assert_eq!(result, Optional::absent());
}

#[rstest]
#[tokio::test]
async fn select_many_async_propagates_absent() {
    let result = Optional::<i32>::absent()
        .select_many_async(|x| async move { Optional::present(x) })
        .await;
    assert_eq!(result, Optional::absent());
}

#[rstest]
#[tokio::test]
async fn select_many_or_else_async_substitutes_alternative() {
    let fallback = Optional::<i32>::absent()
        .select_many_or_else_async(
            |x| async move { Optional::present(x + 1) },
            || async { Optional::present(0) },
        )
        .await;
    assert_eq!(fallback, Optional::present(0));
}

// =============================================================================
// Match
// =============================================================================

#[rstest]
#[tokio::test]
async fn match_async_awaits_present_branch_only() {
    let absent_called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&absent_called);

    let folded = Optional::present(42)
        .match_async(
            |n| async move { n + 1 },
            move || {
                flag.store(true, Ordering::SeqCst);
                async { 0 }
            },
        )
        .await;

    assert_eq!(folded, 43);
    assert!(!absent_called.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn match_async_awaits_absent_branch_only() {
    let present_called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&present_called);

    let folded = Optional::<i32>::absent()
        .match_async(
            move |n| {
                flag.store(true, Ordering::SeqCst);
                async move { n + 1 }
            },
            || async { 0 },
        )
        .await;

    assert_eq!(folded, 0);
    assert!(!present_called.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn if_present_async_runs_action_on_present() {
    let seen = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&seen);

    Optional::present(42)
        .if_present_async(|_| async move {
            flag.store(true, Ordering::SeqCst);
        })
        .await;

    assert!(seen.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn if_present_async_is_noop_on_absent() {
    let seen = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&seen);

    Optional::<i32>::absent()
        .if_present_async(|_| async move {
            flag.store(true, Ordering::SeqCst);
        })
        .await;

    assert!(!seen.load(Ordering::SeqCst));
}

// =============================================================================
// Default Extraction
// =============================================================================

#[rstest]
#[tokio::test]
async fn value_or_else_async_returns_contained_value() {
    let value = Optional::present(42).value_or_else_async(|| async { 0 }).await;
    assert_eq!(value, 42);
}

#[rstest]
#[tokio::test]
async fn value_or_else_async_awaits_surrogate_on_absent() {
    let value = Optional::<i32>::absent()
        .value_or_else_async(|| async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            7
        })
        .await;
    assert_eq!(value, 7);
}

#[rstest]
#[tokio::test]
async fn value_or_else_async_skips_surrogate_on_present() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);

    let value = Optional::present(42)
        .value_or_else_async(move || {
            flag.store(true, Ordering::SeqCst);
            async { 0 }
        })
        .await;

    assert_eq!(value, 42);
    assert!(!invoked.load(Ordering::SeqCst));
}

// =============================================================================
// Capture
// =============================================================================

#[rstest]
#[tokio::test]
async fn capture_async_wraps_some_into_present() {
    let captured = Optional::capture_async(|| async { Some(42) }).await;
    assert_eq!(captured, Optional::present(42));
}

#[rstest]
#[tokio::test]
async fn capture_async_wraps_none_into_absent() {
    let captured: Optional<i32> = Optional::capture_async(|| async { None }).await;
    assert_eq!(captured, Optional::absent());
}

#[rstest]
#[tokio::test]
async fn capture_async_supports_suspension() {
    let captured = Optional::capture_async(|| async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Some("delayed")
    })
    .await;
    assert_eq!(captured, Optional::present("delayed"));
}

#[rstest]
#[tokio::test]
async fn capture_blocking_wraps_present_result() {
    let captured = Optional::capture_blocking(|| Some(42)).await;
    assert_eq!(captured, Optional::present(42));
}

#[rstest]
#[tokio::test]
async fn capture_blocking_wraps_absent_result() {
    let captured: Optional<i32> = Optional::capture_blocking(|| None).await;
    assert_eq!(captured, Optional::absent());
}

#[rstest]
#[tokio::test]
async fn capture_blocking_runs_off_the_async_context() {
    let captured = Optional::capture_blocking(|| {
        // A genuinely blocking operation; would stall the executor if
        // run inline.
        std::thread::sleep(Duration::from_millis(10));
        Some(42)
    })
    .await;
    assert_eq!(captured, Optional::present(42));
}
