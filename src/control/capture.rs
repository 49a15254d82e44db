//! Capture helpers - wrapping possibly-absent computations.
//!
//! A capture helper runs a caller-supplied computation whose result may be
//! absent (a standard `Option`) and wraps the outcome into an
//! [`Optional`]: `None` becomes `Absent`, `Some(v)` becomes `Present(v)`.
//! Wrapping a fallible or nullable operation at its boundary keeps the
//! rest of a pipeline free of null checks.
//!
//! # Examples
//!
//! ```rust
//! use maybars::control::Optional;
//!
//! let numbers = vec![1, 2, 3];
//!
//! let first = Optional::capture(|| numbers.first().copied());
//! assert_eq!(first, Optional::present(1));
//!
//! let tenth = Optional::capture(|| numbers.get(10).copied());
//! assert_eq!(tenth, Optional::absent());
//! ```

use super::Optional;

impl<T> Optional<T> {
    /// Runs a computation and wraps its possibly-absent result.
    ///
    /// Invokes `operation` immediately; a `None` result becomes `Absent`
    /// and a `Some(v)` result becomes `Present(v)`.
    ///
    /// # Arguments
    ///
    /// * `operation` - The computation whose result may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    ///
    /// let parsed = Optional::capture(|| "42".parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::present(42));
    ///
    /// let unparsable = Optional::capture(|| "forty-two".parse::<i32>().ok());
    /// assert_eq!(unparsable, Optional::absent());
    /// ```
    #[inline]
    pub fn capture<F>(operation: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        Self::from_option(operation())
    }
}
