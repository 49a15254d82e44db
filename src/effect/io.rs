//! Io type - a deferred computation.
//!
//! `Io<A>` wraps a computation producing a value of type `A` without
//! executing it. Combinators build a larger description; nothing runs
//! until [`run`](Io::run) is called at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use maybars::effect::Io;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = Io::new(move || {
//!     flag.set(true);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.get());
//!
//! // Executing yields the value
//! assert_eq!(io.run(), 42);
//! assert!(executed.get());
//! ```

use crate::control::Optional;

/// A deferred computation producing a value of type `A`.
///
/// The computation is not executed until [`run`](Self::run) is called;
/// until then, an `Io` is only a description. Chaining combinators
/// composes descriptions without executing anything.
///
/// # Monad Laws
///
/// `Io` satisfies the monad laws:
///
/// 1. **Left Identity**: `Io::pure(a).select_many(f)` runs as `f(a)`
/// 2. **Right Identity**: `m.select_many(Io::pure)` runs as `m`
/// 3. **Associativity**: `m.select_many(f).select_many(g)` runs as
///    `m.select_many(|x| f(x).select_many(g))`
pub struct Io<A> {
    /// The wrapped computation that produces a value of type `A`.
    action: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> Io<A> {
    /// Creates a new `Io` from a closure.
    ///
    /// The closure will not be executed until [`run`](Self::run) is
    /// called.
    ///
    /// # Arguments
    ///
    /// * `action` - A closure that produces a value of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::new(|| 10 + 20);
    /// assert_eq!(io.run(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }

    /// Wraps a pure value in an `Io`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::pure(42);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the deferred computation and returns its result.
    ///
    /// This is the only way to extract a value from an `Io`; it should
    /// be called at the program's edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::pure(42).select(|x| x + 1);
    /// assert_eq!(io.run(), 43);
    /// ```
    pub fn run(self) -> A {
        (self.action)()
    }

    /// Transforms the eventual result using a function.
    ///
    /// The transformation is deferred along with the computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::pure(21).select(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn select<B, F>(self, map_fn: F) -> Io<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Io::new(move || map_fn(self.run()))
    }

    /// Chains deferred computations, passing the result of the first to
    /// a function producing the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::pure(10).select_many(|x| Io::pure(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn select_many<B, F>(self, bind_fn: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
        B: 'static,
    {
        Io::new(move || bind_fn(self.run()).run())
    }

    /// Sequences two deferred computations, discarding the first result.
    ///
    /// The first computation still runs for its effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::effect::Io;
    ///
    /// let io = Io::pure(10).then(Io::pure(20));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn then<B>(self, next: Io<B>) -> Io<B>
    where
        B: 'static,
    {
        self.select_many(move |_| next)
    }
}

// =============================================================================
// Capture Bridge
// =============================================================================

impl<A: 'static> Io<Option<A>> {
    /// Bridges a deferred possibly-absent computation into a deferred
    /// [`Optional`].
    ///
    /// When run, a `None` result becomes `Absent` and a `Some(v)` result
    /// becomes `Present(v)`: capture semantics, deferred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::control::Optional;
    /// use maybars::effect::Io;
    ///
    /// let io = Io::new(|| "42".parse::<i32>().ok()).capture();
    /// assert_eq!(io.run(), Optional::present(42));
    /// ```
    pub fn capture(self) -> Io<Optional<A>> {
        self.select(Optional::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_io_pure_and_run() {
        let io = Io::pure(42);
        assert_eq!(io.run(), 42);
    }

    #[test]
    fn test_io_defers_execution() {
        let executed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&executed);

        let io = Io::new(move || {
            flag.set(true);
            42
        });
        assert!(!executed.get());

        assert_eq!(io.run(), 42);
        assert!(executed.get());
    }

    #[test]
    fn test_io_select() {
        let io = Io::pure(21).select(|x| x * 2);
        assert_eq!(io.run(), 42);
    }

    #[test]
    fn test_io_select_many() {
        let io = Io::pure(10).select_many(|x| Io::pure(x * 2));
        assert_eq!(io.run(), 20);
    }

    #[test]
    fn test_io_then_runs_both() {
        let first_ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&first_ran);

        let io = Io::new(move || flag.set(true)).then(Io::pure(20));
        assert_eq!(io.run(), 20);
        assert!(first_ran.get());
    }

    #[test]
    fn test_io_capture_present_and_absent() {
        let present = Io::new(|| Some(42)).capture();
        assert_eq!(present.run(), Optional::present(42));

        let absent: Io<Optional<i32>> = Io::new(|| None).capture();
        assert_eq!(absent.run(), Optional::absent());
    }
}
