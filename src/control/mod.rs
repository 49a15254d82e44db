//! The optional value type and its combinator algebra.
//!
//! This module provides [`Optional`], a container representing either the
//! presence of a value (`Present`) or its deliberate absence (`Absent`),
//! together with:
//!
//! - Transformation combinators: `select`, `select_many`,
//!   `select_conditional`, `match_with`
//! - Default-extraction accessors: `value_or`, `value_or_else`
//! - Capture helpers that wrap possibly-absent-producing computations
//! - Asynchronous counterparts of the combinators (feature `async`)
//!
//! # Examples
//!
//! ## Chaining transformations
//!
//! ```rust
//! use maybars::control::Optional;
//!
//! let result = Optional::present(4)
//!     .select(|n| n + 10)
//!     .select_conditional(|n| n % 2 == 0)
//!     .select_many(|n| if n > 0 { Optional::present(n * 2) } else { Optional::absent() });
//! assert_eq!(result, Optional::present(28));
//! ```
//!
//! ## Terminating a chain
//!
//! ```rust
//! use maybars::control::Optional;
//!
//! let label = Optional::<i32>::absent().match_with(
//!     |n| format!("got {n}"),
//!     || "got nothing".to_string(),
//! );
//! assert_eq!(label, "got nothing");
//! ```

mod capture;
mod optional;

#[cfg(feature = "async")]
mod optional_async;

pub use optional::Optional;
