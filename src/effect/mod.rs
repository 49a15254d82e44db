//! Deferred computation support.
//!
//! This module provides [`Io`], a minimal type for describing a
//! computation without executing it. The computation runs only when
//! [`run`](Io::run) is called, keeping the describing code pure.
//!
//! `Io` composes with the optional algebra through
//! [`capture`](Io::capture), which turns a deferred possibly-absent
//! computation into a deferred [`Optional`](crate::control::Optional).
//!
//! # Examples
//!
//! ```rust
//! use maybars::effect::Io;
//!
//! let io = Io::pure(10)
//!     .select(|x| x * 2)
//!     .select_many(|x| Io::pure(x + 1));
//!
//! // Nothing has executed yet; run() performs the computation.
//! assert_eq!(io.run(), 21);
//! ```

mod io;

pub use io::Io;
