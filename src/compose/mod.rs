//! Value-level composition utilities.
//!
//! This module provides the synchronous half of the combinator set:
//!
//! - [`conversion`]: nullable values into [`Optional`] and [`Either`]
//! - [`pipeline`]: `map`, `tee`, `tap` and friends, plus the [`Pipeline`]
//!   extension trait
//! - [`identity`] and [`constant`]: small helpers for folds and failure thunks
//!
//! The asynchronous counterparts live in [`crate::effect`].
//!
//! [`Optional`]: crate::control::Optional
//! [`Either`]: crate::control::Either
//!
//! # Examples
//!
//! ## Nullable Lookup to Either
//!
//! ```rust
//! use fnext::compose::{ToOptional, constant};
//! use fnext::control::Either;
//!
//! let lookup = |key: &str| -> Option<&'static str> {
//!     (key == "home").then_some("/index.html")
//! };
//!
//! let resolved = lookup("home").to_optional().to_either_with(constant(404_u16));
//! let missing = lookup("away").to_optional().to_either_with(constant(404_u16));
//!
//! assert_eq!(resolved, Either::Right("/index.html"));
//! assert_eq!(missing, Either::Left(404));
//! ```
//!
//! ## Conditional Transformation
//!
//! ```rust
//! use fnext::compose::Pipeline;
//!
//! let debug = true;
//! let message = "ready"
//!     .to_string()
//!     .tee_when_with(|message| format!("[debug] {message}"), || debug);
//!
//! assert_eq!(message, "[debug] ready");
//! ```

pub mod conversion;
pub mod pipeline;
mod utils;

pub use conversion::{
    ToOptional, present_unless, to_either, to_either_map, to_either_map_with, to_either_when,
    to_either_when_with, to_either_with, to_optional, to_optional_map, to_optional_when,
};
pub use pipeline::{Pipeline, apply, map, same_map, tap, tee, tee_when, tee_when_with};
pub use utils::{constant, identity};
