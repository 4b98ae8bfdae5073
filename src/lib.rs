//! # fnext
//!
//! Functional combinators for computations that may be absent, failed,
//! and/or asynchronous, plus scoped multi-resource execution.
//!
//! ## Overview
//!
//! - **Control Structures**: [`Optional`](control::Optional),
//!   [`Either`](control::Either), scoped `using`/`using2`
//! - **Composition**: nullable-to-optional/either conversions, `map`, `tee`,
//!   `tap` and the `Pipeline` extension trait
//! - **Effects**: the lazily started [`Deferred`](effect::Deferred) and the
//!   asynchronous combinators built on it
//!
//! Every chain preserves laziness and short-circuiting: mapping functions,
//! predicates and failure thunks run at most once, and only on the branch
//! that needs them.
//!
//! ## Feature Flags
//!
//! - `control`: `Optional`, `Either`, scoped execution
//! - `compose`: conversions and pipeline combinators
//! - `effect`: `Deferred` and asynchronous combinators
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnext::prelude::*;
//!
//! let port = to_optional_when(Some("8080"), |text| text.is_empty())
//!     .map(|text| text.parse::<u16>().unwrap_or_default())
//!     .to_either_with(constant("PORT is not set"));
//!
//! assert_eq!(port, Either::Right(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use fnext::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
