//! # maybars
//!
//! An explicit optional value type for Rust with functional combinators,
//! lifting helpers, and async support.
//!
//! ## Overview
//!
//! This library provides [`Optional<T>`](control::Optional), a container
//! that represents either the presence of a value (`Present`) or its
//! deliberate absence (`Absent`), together with a small combinator algebra
//! for composing operations over possibly-absent values without null
//! references or exceptions used as control flow:
//!
//! - **Transformation**: `select` (functor map), `select_many` (monadic
//!   bind), `select_conditional` (filter), `match_with` (fold)
//! - **Lifting**: combine 2–5 independent optionals into one optional
//!   tuple, eagerly or lazily with left-to-right short-circuiting
//! - **Capture**: wrap a possibly-absent-producing computation into an
//!   `Optional`, synchronously or asynchronously
//! - **Deferred Effects**: a minimal [`Io`](effect::Io) type for deferring
//!   a computation until it is explicitly run
//!
//! ## Feature Flags
//!
//! - `control`: the `Optional` type and its combinators
//! - `lift`: lifting helpers for combining independent optionals
//! - `effect`: the `Io` deferred-computation type
//! - `async`: asynchronous counterparts of the combinators
//!
//! ## Example
//!
//! ```rust
//! use maybars::control::Optional;
//!
//! let greeting = Optional::present("world")
//!     .select(|name| format!("Hello, {name}!"))
//!     .value_or_else(|| "Hello, nobody.".to_string());
//! assert_eq!(greeting, "Hello, world!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use maybars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "lift")]
    pub use crate::lift::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "lift")]
pub mod lift;

#[cfg(feature = "effect")]
pub mod effect;
