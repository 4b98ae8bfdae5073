//! Control structures for optional, fallible and scoped computations.
//!
//! This module provides the value-level building blocks of the crate:
//!
//! - [`Optional`]: A value that is present or absent
//! - [`Either`]: A failure (`Left`) or a success (`Right`)
//! - [`Dispose`], [`using`], [`using2`]: Scoped execution with guaranteed release
//!
//! # Examples
//!
//! ## From Optional to Either
//!
//! ```rust
//! use fnext::control::{Either, Optional};
//!
//! let lookup = |key: &str| -> Optional<u32> {
//!     if key == "answer" { Optional::Present(42) } else { Optional::Absent }
//! };
//!
//! assert_eq!(lookup("answer").to_either(404), Either::Right(42));
//! assert_eq!(lookup("question").to_either(404), Either::Left(404));
//! ```
//!
//! ## Scoped Execution
//!
//! ```rust
//! use fnext::control::{Dispose, using2};
//!
//! struct Session;
//! struct Transaction;
//!
//! impl Dispose for Session {
//!     fn dispose(self) {}
//! }
//!
//! impl Dispose for Transaction {
//!     fn dispose(self) {}
//! }
//!
//! // The transaction is released before the session.
//! let rows = using2(Session, |_session| Transaction, |_session, _transaction| 3);
//! assert_eq!(rows, 3);
//! ```

mod either;
mod optional;
mod scoped;

pub use either::Either;
pub use optional::Optional;
pub use scoped::{Dispose, using, using2};

#[cfg(feature = "effect")]
pub(crate) use scoped::{panic_message, release, settle};
