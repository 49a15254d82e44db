//! Lifting helpers - combining independent optionals.
//!
//! A lift combines 2–5 independent [`Optional`](crate::control::Optional)
//! values into one optional of a tuple: the result is `Present` iff every
//! input is `Present`, and `Absent` as soon as any input is `Absent`.
//!
//! Three families are provided:
//!
//! - [`lift2`]..[`lift5`]: eager. Inputs are already-materialized
//!   optionals; values are extracted left-to-right.
//! - [`lift_lazy2`]..[`lift_lazy5`]: lazy. Each source is a
//!   zero-argument function producing an optional, invoked strictly
//!   left-to-right; evaluation stops at the first `Absent` and later
//!   sources are never invoked.
//! - [`lift_lazy_async2`]..[`lift_lazy_async5`]: lazy and suspendable,
//!   with the same short-circuit contract and each source awaited in
//!   order (feature `async`).
//!
//! The lifts are free functions rather than methods so the core type
//! stays arity-independent. Tuples produced here are plain positional
//! aggregates, not new named types.
//!
//! # Examples
//!
//! ## All-or-nothing combination
//!
//! ```rust
//! use maybars::control::Optional;
//! use maybars::lift::lift2;
//!
//! assert_eq!(
//!     lift2(Optional::present(1), Optional::present(2)),
//!     Optional::present((1, 2))
//! );
//! assert_eq!(
//!     lift2(Optional::present(1), Optional::<i32>::absent()),
//!     Optional::absent()
//! );
//! ```
//!
//! ## Short-circuiting lazy sources
//!
//! ```rust
//! use maybars::control::Optional;
//! use maybars::lift::lift_lazy2;
//!
//! let combined: Optional<(i32, i32)> = lift_lazy2(
//!     || Optional::absent(),
//!     || unreachable!("never invoked after an absent source"),
//! );
//! assert_eq!(combined, Optional::absent());
//! ```

mod eager;
mod lazy;

#[cfg(feature = "async")]
mod lazy_async;

pub use eager::{lift2, lift3, lift4, lift5};
pub use lazy::{lift_lazy2, lift_lazy3, lift_lazy4, lift_lazy5};

#[cfg(feature = "async")]
pub use lazy_async::{lift_lazy_async2, lift_lazy_async3, lift_lazy_async4, lift_lazy_async5};
