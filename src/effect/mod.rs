//! Deferred asynchronous computations and their combinators.
//!
//! This module provides the asynchronous half of the crate:
//!
//! - [`Deferred`]: a lazily started computation that produces one value
//! - [`Computation`]: anything convertible into a `Deferred` (every
//!   `Send + 'static` future, including `async` blocks and
//!   `std::future::ready`)
//! - Combinators over `Optional` and `Either` computations
//! - [`using_async`] and [`using2_async`] for scoped resources
//!
//! # Sync and Async Handlers
//!
//! Sources and handlers are both `Computation`s, so a single function covers
//! every mix of synchronous and asynchronous stages. A synchronous handler
//! returns [`Deferred::pure`] or `std::future::ready`:
//!
//! ```rust
//! use fnext::control::Optional;
//! use fnext::effect::{Deferred, bind_optional_async, or_else_async};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let found = Deferred::pure(Optional::Present(2));
//!
//! let checked = bind_optional_async(found, |value: i32| {
//!     Deferred::pure(Optional::Present(value).filter(|value| *value > 5))
//! });
//!
//! assert_eq!(or_else_async(checked, 0).await, 0);
//! # });
//! ```
//!
//! # Laziness
//!
//! Combinators only describe the chain. Nothing runs, and no handler is
//! called, before the returned `Deferred` is awaited; each source is awaited
//! exactly once.

mod combinators;
mod deferred;
mod scoped;

pub use combinators::{
    bind_failure_async, bind_optional_async, bind_success_async, if_absent_async, map_async,
    map_failure_async, map_optional_async, map_success_async, match_async, match_optional_async,
    match_unsafe_async, or_else_async, to_either_async, to_either_async_map,
    to_either_async_map_with, to_either_async_when, to_either_async_when_with,
    to_either_async_with, to_optional_async, to_optional_async_map, to_optional_async_when,
};
pub use deferred::{Computation, Deferred};
pub use scoped::{using2_async, using_async};
