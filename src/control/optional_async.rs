//! Asynchronous combinators for `Optional`.
//!
//! Every synchronous combinator on [`Optional`] has an asynchronous
//! counterpart here that accepts suspendable computations. The core never
//! suspends on its own account: suspension points sit exactly where the
//! caller-supplied computation suspends, and chained combinators await
//! their steps strictly left-to-right, one at a time. No concurrent
//! fan-out is introduced implicitly.
//!
//! Cancellation and panics of an awaited step propagate as a failure of
//! the enclosing combinator call; nothing is caught or retried here.
//!
//! # Examples
//!
//! ```rust,ignore
//! use maybars::control::Optional;
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = Optional::present(21)
//!         .select_async(|x| async move { x * 2 })
//!         .await;
//!     assert_eq!(result, Optional::present(42));
//! }
//! ```

use std::future::Future;

use super::Optional;

// =============================================================================
// Functor Operations
// =============================================================================

impl<T> Optional<T> {
    /// Asynchronous counterpart of [`select`](Self::select).
    ///
    /// If this is `Present(v)`, awaits `map_fn(v)` and wraps the result in
    /// `Present`. If this is `Absent`, returns `Absent` without invoking
    /// `map_fn`.
    ///
    /// # Arguments
    ///
    /// * `map_fn` - A suspendable transformation of the contained value.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let result = Optional::present(21)
    ///     .select_async(|x| async move { x * 2 })
    ///     .await;
    /// assert_eq!(result, Optional::present(42));
    /// ```
    pub async fn select_async<U, F, Fut>(self, map_fn: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => Optional::Present(map_fn(value).await),
            Self::Absent => Optional::Absent,
        }
    }

    /// Asynchronous counterpart of
    /// [`select_or_else`](Self::select_or_else).
    ///
    /// The absent branch awaits `none_fn()` and yields its result as a new
    /// `Present` payload; exactly one of the two computations is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let substituted = Optional::<i32>::absent()
    ///     .select_or_else_async(|x| async move { x + 1 }, || async { 0 })
    ///     .await;
    /// assert_eq!(substituted, Optional::present(0));
    /// ```
    pub async fn select_or_else_async<U, F, FFut, G, GFut>(
        self,
        map_fn: F,
        none_fn: G,
    ) -> Optional<U>
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => Optional::Present(map_fn(value).await),
            Self::Absent => Optional::Present(none_fn().await),
        }
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<T> Optional<T> {
    /// Asynchronous counterpart of [`select_many`](Self::select_many).
    ///
    /// If this is `Present(v)`, awaits `bind_fn(v)` and returns its
    /// `Optional` result directly. If this is `Absent`, returns `Absent`
    /// without invoking `bind_fn`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let result = Optional::present(8)
    ///     .select_many_async(|x| async move {
    ///         if x % 2 == 0 { Optional::present(x / 2) } else { Optional::absent() }
    ///     })
    ///     .await;
    /// assert_eq!(result, Optional::present(4));
    /// ```
    pub async fn select_many_async<U, F, Fut>(self, bind_fn: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        match self {
            Self::Present(value) => bind_fn(value).await,
            Self::Absent => Optional::Absent,
        }
    }

    /// Asynchronous counterpart of
    /// [`select_many_or_else`](Self::select_many_or_else).
    ///
    /// The absent branch awaits the alternative `Optional`-producing
    /// computation `none_fn()` instead of propagating `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let fallback = Optional::<i32>::absent()
    ///     .select_many_or_else_async(
    ///         |x| async move { Optional::present(x + 1) },
    ///         || async { Optional::present(0) },
    ///     )
    ///     .await;
    /// assert_eq!(fallback, Optional::present(0));
    /// ```
    pub async fn select_many_or_else_async<U, F, FFut, G, GFut>(
        self,
        bind_fn: F,
        none_fn: G,
    ) -> Optional<U>
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = Optional<U>>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = Optional<U>>,
    {
        match self {
            Self::Present(value) => bind_fn(value).await,
            Self::Absent => none_fn().await,
        }
    }
}

// =============================================================================
// Elimination
// =============================================================================

impl<T> Optional<T> {
    /// Asynchronous counterpart of [`match_with`](Self::match_with).
    ///
    /// Awaits exactly one of the two computations depending on the
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let description = Optional::<i32>::absent()
    ///     .match_async(
    ///         |n| async move { format!("got {n}") },
    ///         || async { "got nothing".to_string() },
    ///     )
    ///     .await;
    /// assert_eq!(description, "got nothing");
    /// ```
    pub async fn match_async<R, F, FFut, G, GFut>(self, on_present: F, on_absent: G) -> R
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = R>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = R>,
    {
        match self {
            Self::Present(value) => on_present(value).await,
            Self::Absent => on_absent().await,
        }
    }

    /// Asynchronous counterpart of [`if_present`](Self::if_present).
    ///
    /// Awaits the action on the contained value; a no-op on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// Optional::present(42)
    ///     .if_present_async(|n| async move { println!("{n}") })
    ///     .await;
    /// ```
    pub async fn if_present_async<F, Fut>(self, action: F)
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Present(value) = self {
            action(value).await;
        }
    }

    /// Asynchronous counterpart of [`value_or_else`](Self::value_or_else).
    ///
    /// The surrogate computation is awaited only when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let value = Optional::<i32>::absent()
    ///     .value_or_else_async(|| async { 7 })
    ///     .await;
    /// assert_eq!(value, 7);
    /// ```
    pub async fn value_or_else_async<F, Fut>(self, surrogate_fn: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => surrogate_fn().await,
        }
    }
}

// =============================================================================
// Capture
// =============================================================================

impl<T> Optional<T> {
    /// Suspending counterpart of [`capture`](Self::capture).
    ///
    /// Awaits the operation's future on the caller's executor and wraps
    /// its possibly-absent result: `None` becomes `Absent`, `Some(v)`
    /// becomes `Present(v)`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let captured = Optional::capture_async(|| async { Some(42) }).await;
    /// assert_eq!(captured, Optional::present(42));
    /// ```
    pub async fn capture_async<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        Self::from_option(operation().await)
    }
}

impl<T: Send + 'static> Optional<T> {
    /// Captures a blocking computation from an asynchronous context.
    ///
    /// Dispatches `operation` onto the runtime's blocking thread pool via
    /// [`tokio::task::spawn_blocking`] and wraps its possibly-absent
    /// result. A panic inside the operation is resumed on the awaiting
    /// task rather than being caught.
    ///
    /// # Panics
    ///
    /// Panics if the operation panics, or if the runtime shuts down
    /// before the operation completes.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    ///
    /// let captured = Optional::capture_blocking(|| {
    ///     std::thread::sleep(std::time::Duration::from_millis(10));
    ///     Some(42)
    /// })
    /// .await;
    /// assert_eq!(captured, Optional::present(42));
    /// ```
    pub async fn capture_blocking<F>(operation: F) -> Self
    where
        F: FnOnce() -> Option<T> + Send + 'static,
    {
        match tokio::task::spawn_blocking(operation).await {
            Ok(result) => Self::from_option(result),
            Err(join_error) if join_error.is_panic() => {
                std::panic::resume_unwind(join_error.into_panic())
            }
            Err(join_error) => panic!("blocking capture failed to complete: {join_error}"),
        }
    }
}
