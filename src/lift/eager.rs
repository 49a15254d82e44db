//! Eager lifts over already-materialized optionals.
//!
//! The fixed arities (2 through 5) are generated by a macro step; each
//! generated function extracts the input values left-to-right and
//! returns `Absent` as soon as any input is `Absent`.

use crate::control::Optional;

/// Generates an eager lift of fixed arity. Doc comments are supplied at
/// the invocation site so each arity documents itself.
macro_rules! define_lift {
    (
        $(#[$meta:meta])*
        $name:ident => $(($value:ident, $type:ident)),+
    ) => {
        $(#[$meta])*
        pub fn $name<$($type),+>($($value: Optional<$type>),+) -> Optional<($($type),+)> {
            $(
                let $value = match $value {
                    Optional::Present(value) => value,
                    Optional::Absent => return Optional::Absent,
                };
            )+
            Optional::Present(($($value),+))
        }
    };
}

define_lift! {
    /// Combines two independent optionals into one optional pair.
    ///
    /// Returns `Present((v1, v2))` iff both inputs are `Present`;
    /// returns `Absent` if either input is `Absent`. Values are
    /// extracted left-to-right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    /// use maybars::lift::lift2;
    ///
    /// assert_eq!(
    ///     lift2(Optional::present(1), Optional::present("two")),
    ///     Optional::present((1, "two"))
    /// );
    /// assert_eq!(
    ///     lift2(Optional::<i32>::absent(), Optional::present("two")),
    ///     Optional::absent()
    /// );
    /// ```
    lift2 => (first, T1), (second, T2)
}

define_lift! {
    /// Combines three independent optionals into one optional triple.
    ///
    /// Returns `Present((v1, v2, v3))` iff every input is `Present`;
    /// returns `Absent` if any input is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    /// use maybars::lift::lift3;
    ///
    /// let combined = lift3(
    ///     Optional::present(1),
    ///     Optional::present(2),
    ///     Optional::present(3),
    /// );
    /// assert_eq!(combined, Optional::present((1, 2, 3)));
    /// ```
    lift3 => (first, T1), (second, T2), (third, T3)
}

define_lift! {
    /// Combines four independent optionals into one optional quadruple.
    ///
    /// Returns `Present((v1, v2, v3, v4))` iff every input is `Present`;
    /// returns `Absent` if any input is `Absent`.
    lift4 => (first, T1), (second, T2), (third, T3), (fourth, T4)
}

define_lift! {
    /// Combines five independent optionals into one optional quintuple.
    ///
    /// Returns `Present((v1, v2, v3, v4, v5))` iff every input is
    /// `Present`; returns `Absent` if any input is `Absent`.
    lift5 => (first, T1), (second, T2), (third, T3), (fourth, T4), (fifth, T5)
}
