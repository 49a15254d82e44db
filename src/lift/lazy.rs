//! Lazy lifts over deferred optional sources.
//!
//! Each source is a zero-argument function producing an optional. The
//! sources are invoked strictly left-to-right, and evaluation stops at
//! the first `Absent` result: later sources are never invoked. This is
//! the one place in the library where short-circuit evaluation is
//! observable, so the order is part of the contract.

use crate::control::Optional;

/// Generates a lazy lift of fixed arity. Doc comments are supplied at
/// the invocation site so each arity documents itself.
macro_rules! define_lift_lazy {
    (
        $(#[$meta:meta])*
        $name:ident => $(($source:ident, $type:ident, $function:ident)),+
    ) => {
        $(#[$meta])*
        pub fn $name<$($type,)+ $($function),+>($($source: $function),+) -> Optional<($($type),+)>
        where
            $($function: FnOnce() -> Optional<$type>),+
        {
            $(
                let $source = match $source() {
                    Optional::Present(value) => value,
                    Optional::Absent => return Optional::Absent,
                };
            )+
            Optional::Present(($($source),+))
        }
    };
}

define_lift_lazy! {
    /// Lazily combines two deferred optional sources into one optional
    /// pair.
    ///
    /// `first` is invoked before `second`; if `first` yields `Absent`,
    /// `second` is never invoked and the result is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    /// use maybars::lift::lift_lazy2;
    ///
    /// let combined = lift_lazy2(|| Optional::present(1), || Optional::present(2));
    /// assert_eq!(combined, Optional::present((1, 2)));
    ///
    /// let short_circuited: Optional<(i32, i32)> = lift_lazy2(
    ///     || Optional::absent(),
    ///     || panic!("never invoked"),
    /// );
    /// assert_eq!(short_circuited, Optional::absent());
    /// ```
    lift_lazy2 => (first, T1, F1), (second, T2, F2)
}

define_lift_lazy! {
    /// Lazily combines three deferred optional sources into one optional
    /// triple.
    ///
    /// Sources are invoked strictly left-to-right; the first `Absent`
    /// result stops evaluation and later sources are never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    /// use maybars::lift::lift_lazy3;
    ///
    /// let combined = lift_lazy3(
    ///     || Optional::present(1),
    ///     || Optional::present(2),
    ///     || Optional::present(3),
    /// );
    /// assert_eq!(combined, Optional::present((1, 2, 3)));
    /// ```
    lift_lazy3 => (first, T1, F1), (second, T2, F2), (third, T3, F3)
}

define_lift_lazy! {
    /// Lazily combines four deferred optional sources into one optional
    /// quadruple.
    ///
    /// Sources are invoked strictly left-to-right; the first `Absent`
    /// result stops evaluation and later sources are never invoked.
    lift_lazy4 => (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4)
}

define_lift_lazy! {
    /// Lazily combines five deferred optional sources into one optional
    /// quintuple.
    ///
    /// Sources are invoked strictly left-to-right; the first `Absent`
    /// result stops evaluation and later sources are never invoked.
    lift_lazy5 => (first, T1, F1), (second, T2, F2), (third, T3, F3), (fourth, T4, F4), (fifth, T5, F5)
}
