//! Lazy asynchronous lifts over suspendable optional sources.
//!
//! Each source is a zero-argument function returning a future of an
//! optional. Sources are awaited strictly in order, and a later
//! source's future is not even constructed until the previous result is
//! known, so the short-circuit property of the lazy lifts is preserved
//! across suspension points. No concurrent fan-out is introduced.

use std::future::Future;

use crate::control::Optional;

/// Generates a lazy asynchronous lift of fixed arity. Doc comments are
/// supplied at the invocation site so each arity documents itself.
macro_rules! define_lift_lazy_async {
    (
        $(#[$meta:meta])*
        $name:ident => $(($source:ident, $type:ident, $function:ident, $future:ident)),+
    ) => {
        $(#[$meta])*
        pub async fn $name<$($type,)+ $($function,)+ $($future),+>(
            $($source: $function),+
        ) -> Optional<($($type),+)>
        where
            $(
                $function: FnOnce() -> $future,
                $future: Future<Output = Optional<$type>>,
            )+
        {
            $(
                let $source = match $source().await {
                    Optional::Present(value) => value,
                    Optional::Absent => return Optional::Absent,
                };
            )+
            Optional::Present(($($source),+))
        }
    };
}

define_lift_lazy_async! {
    /// Lazily combines two suspendable optional sources into one
    /// optional pair.
    ///
    /// `first` is invoked and awaited before `second` is even
    /// constructed; if `first` yields `Absent`, `second` is never
    /// invoked and the result is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    /// use maybars::lift::lift_lazy_async2;
    ///
    /// let combined = lift_lazy_async2(
    ///     || async { Optional::present(1) },
    ///     || async { Optional::present(2) },
    /// )
    /// .await;
    /// assert_eq!(combined, Optional::present((1, 2)));
    /// ```
    lift_lazy_async2 => (first, T1, F1, Fut1), (second, T2, F2, Fut2)
}

define_lift_lazy_async! {
    /// Lazily combines three suspendable optional sources into one
    /// optional triple.
    ///
    /// Sources are awaited strictly in order; the first `Absent` result
    /// stops evaluation and later sources are never invoked.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use maybars::control::Optional;
    /// use maybars::lift::lift_lazy_async3;
    ///
    /// let combined = lift_lazy_async3(
    ///     || async { Optional::present(1) },
    ///     || async { Optional::present(2) },
    ///     || async { Optional::present(3) },
    /// )
    /// .await;
    /// assert_eq!(combined, Optional::present((1, 2, 3)));
    /// ```
    lift_lazy_async3 => (first, T1, F1, Fut1), (second, T2, F2, Fut2), (third, T3, F3, Fut3)
}

define_lift_lazy_async! {
    /// Lazily combines four suspendable optional sources into one
    /// optional quadruple.
    ///
    /// Sources are awaited strictly in order; the first `Absent` result
    /// stops evaluation and later sources are never invoked.
    lift_lazy_async4 => (first, T1, F1, Fut1), (second, T2, F2, Fut2), (third, T3, F3, Fut3), (fourth, T4, F4, Fut4)
}

define_lift_lazy_async! {
    /// Lazily combines five suspendable optional sources into one
    /// optional quintuple.
    ///
    /// Sources are awaited strictly in order; the first `Absent` result
    /// stops evaluation and later sources are never invoked.
    lift_lazy_async5 => (first, T1, F1, Fut1), (second, T2, F2, Fut2), (third, T3, F3, Fut3), (fourth, T4, F4, Fut4), (fifth, T5, F5, Fut5)
}
