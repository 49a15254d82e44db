//! Optional type - a value that may be present or deliberately absent.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! contained value (`Present`) or the explicit absence of one (`Absent`).
//! It is used instead of null references for:
//!
//! - Lookup operations that may find nothing
//! - Projections of fields that may be unset
//! - Composing chains of operations where any step may yield nothing
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Optional;
//!
//! // Creating optional values
//! let present = Optional::present(42);
//! let absent: Optional<i32> = Optional::absent();
//!
//! // Pattern matching
//! match present {
//!     Optional::Present(n) => println!("Got a value: {}", n),
//!     Optional::Absent => println!("Got nothing"),
//! }
//!
//! // Using match_with to handle both cases
//! let message = absent.match_with(
//!     |n| format!("Value: {}", n),
//!     || "No value.".to_string(),
//! );
//! assert_eq!(message, "No value.");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use static_assertions::assert_impl_all;

/// A value that is either present or deliberately absent.
///
/// `Optional<T>` represents a value of type `T`, or the absence of one.
/// Unlike a null reference, absence is a first-class variant that every
/// combinator handles explicitly, so a chain of transformations can never
/// dereference a missing value.
///
/// Once constructed, an `Optional`'s variant and contained value never
/// change; every combinator consumes its input and produces a new value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybars::control::Optional;
///
/// let found: Optional<i32> = Optional::present(42);
/// let missing: Optional<i32> = Optional::absent();
///
/// // Map over the contained value
/// let doubled = found.select(|x| x * 2);
/// assert_eq!(doubled, Optional::present(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    /// The variant holding exactly one value.
    Present(T),
    /// The variant holding no value.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs a `Present` holding the given value.
    ///
    /// Presence always carries a genuine value; there is no way to build a
    /// `Present` without one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let value = Optional::present(42);
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Constructs an `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let value: Optional<i32> = Optional::absent();
    /// assert!(value.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert!(Optional::present(42).is_present());
    /// assert!(!Optional::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert!(Optional::<i32>::absent().is_absent());
    /// assert!(!Optional::present(42).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Transformation (Functor)
    // =========================================================================

    /// Transforms the contained value, preserving presence or absence.
    ///
    /// If this is `Present(v)`, returns `Present(map_fn(v))`.
    /// If this is `Absent`, returns `Absent` without invoking `map_fn`.
    ///
    /// This is the functor map: `select(identity)` returns the original
    /// value, and `m.select(f).select(g)` equals `m.select(|x| g(f(x)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let result = Optional::present(21).select(|x| x * 2);
    /// assert_eq!(result, Optional::present(42));
    ///
    /// let absent = Optional::<i32>::absent().select(|x| x * 2);
    /// assert_eq!(absent, Optional::absent());
    /// ```
    #[inline]
    pub fn select<U, F>(self, map_fn: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(map_fn(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Total variant of [`select`](Self::select): the absent branch
    /// substitutes a computed value.
    ///
    /// If this is `Present(v)`, returns `Present(map_fn(v))`.
    /// If this is `Absent`, returns `Present(none_fn())`. Note that the
    /// result is always `Present`; the none-function's output becomes the
    /// new payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let result = Optional::present(10).select_or_else(|x| x + 1, || 0);
    /// assert_eq!(result, Optional::present(11));
    ///
    /// let substituted = Optional::<i32>::absent().select_or_else(|x| x + 1, || 0);
    /// assert_eq!(substituted, Optional::present(0));
    /// ```
    #[inline]
    pub fn select_or_else<U, F, G>(self, map_fn: F, none_fn: G) -> Optional<U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(map_fn(value)),
            Self::Absent => Optional::Present(none_fn()),
        }
    }

    // =========================================================================
    // Transformation (Monad)
    // =========================================================================

    /// Transforms the contained value into a new `Optional`, flattening
    /// the result.
    ///
    /// If this is `Present(v)`, returns `bind_fn(v)`, which may itself be
    /// `Absent`. If this is `Absent`, returns `Absent` without invoking
    /// `bind_fn`.
    ///
    /// This is the monadic bind and satisfies the monad laws:
    ///
    /// - Left identity: `Optional::present(v).select_many(f) == f(v)`
    /// - Right identity: `m.select_many(Optional::present) == m`
    /// - Associativity: `m.select_many(f).select_many(g) ==
    ///   m.select_many(|x| f(x).select_many(g))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { Optional::present(n / 2) } else { Optional::absent() }
    /// }
    ///
    /// assert_eq!(Optional::present(8).select_many(half), Optional::present(4));
    /// assert_eq!(Optional::present(3).select_many(half), Optional::absent());
    /// assert_eq!(Optional::absent().select_many(half), Optional::absent());
    /// ```
    #[inline]
    pub fn select_many<U, F>(self, bind_fn: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => bind_fn(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Total variant of [`select_many`](Self::select_many): the absent
    /// branch substitutes an alternative `Optional`-producing computation.
    ///
    /// If this is `Present(v)`, returns `bind_fn(v)`.
    /// If this is `Absent`, returns `none_fn()`, an `Optional` rather than
    /// a raw value, so the substitute computation may itself yield `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let fallback = Optional::<i32>::absent()
    ///     .select_many_or_else(|x| Optional::present(x + 1), || Optional::present(0));
    /// assert_eq!(fallback, Optional::present(0));
    /// ```
    #[inline]
    pub fn select_many_or_else<U, F, G>(self, bind_fn: F, none_fn: G) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
        G: FnOnce() -> Optional<U>,
    {
        match self {
            Self::Present(value) => bind_fn(value),
            Self::Absent => none_fn(),
        }
    }

    /// Binds through `selector` and combines both values with `projector`.
    ///
    /// If this is `Present(v)` and `selector(&v)` is `Present(u)`, returns
    /// `Present(projector(v, u))`; otherwise returns `Absent`. This is the
    /// comprehension form of `select_many`, letting a two-source pipeline
    /// keep both intermediate values in scope.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let sum = Optional::present(13)
    ///     .select_many_with(|_| Optional::present(42), |a, b| a + b);
    /// assert_eq!(sum, Optional::present(55));
    /// ```
    #[inline]
    pub fn select_many_with<U, V, F, G>(self, selector: F, projector: G) -> Optional<V>
    where
        F: FnOnce(&T) -> Optional<U>,
        G: FnOnce(T, U) -> V,
    {
        match self {
            Self::Present(value) => match selector(&value) {
                Optional::Present(selected) => Optional::Present(projector(value, selected)),
                Optional::Absent => Optional::Absent,
            },
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Conditional Filtering
    // =========================================================================

    /// Keeps the contained value only if it satisfies the predicate.
    ///
    /// `Present(v)` where `predicate(&v)` is `true` stays `Present(v)`;
    /// `Present(v)` where the predicate is `false` becomes `Absent`;
    /// `Absent` stays `Absent` and the predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    ///
    /// assert_eq!(Optional::present(4).select_conditional(is_even), Optional::present(4));
    /// assert_eq!(Optional::present(3).select_conditional(is_even), Optional::absent());
    /// assert_eq!(Optional::absent().select_conditional(is_even), Optional::absent());
    /// ```
    #[inline]
    pub fn select_conditional<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Elimination (Match / Fold)
    // =========================================================================

    /// Eliminates the optional by applying exactly one of two functions.
    ///
    /// Calls `on_present` with the contained value if this is `Present`,
    /// otherwise calls `on_absent`. The result type is chosen by the
    /// caller; with `()` this doubles as a side-effecting match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let description = Optional::present(42).match_with(
    ///     |n| format!("the answer is {}", n),
    ///     || "no answer".to_string(),
    /// );
    /// assert_eq!(description, "the answer is 42");
    /// ```
    #[inline]
    pub fn match_with<R, F, G>(self, on_present: F, on_absent: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Runs a side-effecting action on the contained value, if any.
    ///
    /// A no-op on `Absent`. This is the single-branch form of
    /// [`match_with`](Self::match_with) for Present-only reactions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let mut seen = None;
    /// Optional::present(42).if_present(|n| seen = Some(n));
    /// assert_eq!(seen, Some(42));
    ///
    /// Optional::<i32>::absent().if_present(|n| seen = Some(n * 2));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn if_present<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Default Extraction
    // =========================================================================

    /// Returns the contained value, or the given surrogate if absent.
    ///
    /// The surrogate is evaluated eagerly by the caller; use
    /// [`value_or_else`](Self::value_or_else) when the default is
    /// expensive to compute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert_eq!(Optional::present(42).value_or(0), 42);
    /// assert_eq!(Optional::absent().value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, surrogate: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => surrogate,
        }
    }

    /// Returns the contained value, or computes a surrogate if absent.
    ///
    /// The factory is invoked only when this is `Absent`, so expensive or
    /// side-effecting default computation is skipped on the happy path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert_eq!(Optional::present(42).value_or_else(|| 0), 42);
    /// assert_eq!(Optional::absent().value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, surrogate_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => surrogate_fn(),
        }
    }

    // =========================================================================
    // Advanced Accessors
    // =========================================================================

    /// Returns the contained value, consuming the optional.
    ///
    /// This bypasses the combinator surface; prefer
    /// [`match_with`](Self::match_with) or [`value_or`](Self::value_or)
    /// unless presence has already been established.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let value = Optional::present(42);
    /// assert_eq!(value.unwrap_present(), 42);
    /// ```
    #[inline]
    pub fn unwrap_present(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Optional::unwrap_present()` on an `Absent` value"),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// Useful for running a non-consuming pipeline over a borrowed
    /// optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let text = Optional::present("hello".to_string());
    /// let length = text.as_ref().select(|s| s.len());
    /// assert_eq!(length, Optional::present(5));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts a standard `Option` into an `Optional`.
    ///
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert_eq!(Optional::from_option(Some(42)), Optional::present(42));
    /// assert_eq!(Optional::<i32>::from_option(None), Optional::absent());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Converts the `Optional` into a standard `Option`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert_eq!(Optional::present(42).into_option(), Some(42));
    /// assert_eq!(Optional::<i32>::absent().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Default-based Extraction
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// assert_eq!(Optional::present(42).value_or_default(), 42);
    /// assert_eq!(Optional::<i32>::absent().value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

/// `Absent` feeds this fixed byte into the hasher; `Present` hashes
/// exactly the contained value. Equal optionals therefore hash equally,
/// and an `Absent` of any payload type hashes to the same state.
const ABSENT_HASH_TAG: u8 = 0;

impl<T: Hash> Hash for Optional<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Present(value) => value.hash(state),
            Self::Absent => state.write_u8(ABSENT_HASH_TAG),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// `Present` renders as the contained value; `Absent` renders as the
    /// empty string.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => value.fmt(formatter),
            Self::Absent => Ok(()),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option` to an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let present: Optional<i32> = Some(42).into();
    /// assert_eq!(present, Optional::present(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` to a standard `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let option: Option<i32> = Optional::present(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// An optional of a thread-safe payload is itself thread-safe.
assert_impl_all!(Optional<i32>: Copy, Send, Sync);
assert_impl_all!(Optional<String>: Clone, Send, Sync);
