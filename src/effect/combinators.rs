//! Asynchronous combinators over [`Optional`] and [`Either`] computations.
//!
//! Every function here takes its source as a [`Computation`] and returns a
//! [`Deferred`], so nothing runs until the result is awaited. Handlers are
//! `Computation`s as well: a synchronous handler returns [`Deferred::pure`]
//! or `std::future::ready`, an asynchronous one returns an `async` block.
//!
//! # Short-Circuiting
//!
//! Once a stage resolves to `Left` or `Absent`, success-side handlers of
//! later stages are never called. Terminal folds (`match_async`,
//! `match_optional_async`) call exactly one of their handlers.
//!
//! # Examples
//!
//! ```rust
//! use fnext::control::Either;
//! use fnext::effect::{Deferred, bind_success_async, map_failure_async, match_async};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let parsed = Deferred::pure(Either::<String, &str>::Right("17"));
//! let validated = bind_success_async(parsed, |text| {
//!     std::future::ready(Either::from(text.parse::<u8>().map_err(|error| error.to_string())))
//! });
//! let reported = map_failure_async(validated, |error| async move { format!("invalid: {error}") });
//!
//! let status = match_async(
//!     reported,
//!     |value| std::future::ready(format!("ok {value}")),
//!     std::future::ready,
//! )
//! .await;
//!
//! assert_eq!(status, "ok 17");
//! # });
//! ```

use crate::compose::{to_either_map_with, to_optional, to_optional_map, to_optional_when};
use crate::control::{Either, Optional};

use super::{Computation, Deferred};

// =============================================================================
// Optional Conversions
// =============================================================================

/// Awaits a nullable source and converts it into an [`Optional`].
pub fn to_optional_async<S, T>(source: S) -> Deferred<Optional<T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
{
    source.into_deferred().map(to_optional)
}

/// Awaits a nullable source, treating `None` and values matched by
/// `absent_when` as absent.
///
/// # Examples
///
/// ```rust
/// use fnext::control::Optional;
/// use fnext::effect::to_optional_async_when;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let cached = async { Some(Vec::<u8>::new()) };
/// assert_eq!(to_optional_async_when(cached, Vec::is_empty).await, Optional::Absent);
/// # });
/// ```
pub fn to_optional_async_when<S, T, P>(source: S, absent_when: P) -> Deferred<Optional<T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    source
        .into_deferred()
        .map(move |value| to_optional_when(value, absent_when))
}

/// Like [`to_optional_async_when`], then maps the present payload.
pub fn to_optional_async_map<S, T, U, F, P>(source: S, map: F, absent_when: P) -> Deferred<Optional<U>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    source
        .into_deferred()
        .map(move |value| to_optional_map(value, map, absent_when))
}

// =============================================================================
// Either Conversions
// =============================================================================

/// Awaits a nullable source and converts it into an [`Either`].
pub fn to_either_async<S, T, L>(source: S, failure: L) -> Deferred<Either<L, T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    L: Send + 'static,
{
    to_either_async_with(source, move || failure)
}

/// Like [`to_either_async`], also failing when `failure_when` matches.
pub fn to_either_async_when<S, T, L, P>(source: S, failure_when: P, failure: L) -> Deferred<Either<L, T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    L: Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    to_either_async_when_with(source, failure_when, move || failure)
}

/// Like [`to_either_async_when`], then maps the success payload.
pub fn to_either_async_map<S, T, U, L, F, P>(
    source: S,
    map: F,
    failure_when: P,
    failure: L,
) -> Deferred<Either<L, U>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    U: Send + 'static,
    L: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
{
    to_either_async_map_with(source, map, failure_when, move || failure)
}

/// Thunk form of [`to_either_async`]; `failure` is only called for `None`.
pub fn to_either_async_with<S, T, L, G>(source: S, failure: G) -> Deferred<Either<L, T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    L: Send + 'static,
    G: FnOnce() -> L + Send + 'static,
{
    to_either_async_map_with(source, std::convert::identity, |_| false, failure)
}

/// Thunk form of [`to_either_async_when`].
pub fn to_either_async_when_with<S, T, L, P, G>(
    source: S,
    failure_when: P,
    failure: G,
) -> Deferred<Either<L, T>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    L: Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
    G: FnOnce() -> L + Send + 'static,
{
    to_either_async_map_with(source, std::convert::identity, failure_when, failure)
}

/// Thunk form of [`to_either_async_map`].
pub fn to_either_async_map_with<S, T, U, L, F, P, G>(
    source: S,
    map: F,
    failure_when: P,
    failure: G,
) -> Deferred<Either<L, U>>
where
    S: Computation<Output = Option<T>>,
    T: Send + 'static,
    U: Send + 'static,
    L: Send + 'static,
    F: FnOnce(T) -> U + Send + 'static,
    P: FnOnce(&T) -> bool + Send + 'static,
    G: FnOnce() -> L + Send + 'static,
{
    source
        .into_deferred()
        .map(move |value| to_either_map_with(value, map, failure_when, failure))
}

// =============================================================================
// Projection
// =============================================================================

/// Awaits `source`, then awaits the projection of its value.
///
/// Each of the two computations is evaluated exactly once.
pub fn map_async<S, F, C>(source: S, projection: F) -> Deferred<C::Output>
where
    S: Computation,
    F: FnOnce(S::Output) -> C + Send + 'static,
    C: Computation,
{
    source.into_deferred().flat_map(projection)
}

// =============================================================================
// Either Chaining
// =============================================================================

/// Transforms the failure value; a success passes through untouched.
pub fn map_failure_async<S, L, R, F, C>(source: S, on_failure: F) -> Deferred<Either<C::Output, R>>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
    F: FnOnce(L) -> C + Send + 'static,
    C: Computation,
{
    source.into_deferred().flat_map(move |either| match either {
        Either::Left(failure) => on_failure(failure).into_deferred().map(Either::Left),
        Either::Right(success) => Deferred::pure(Either::Right(success)),
    })
}

/// Chains a computation on the failure value, which may recover to `Right`.
pub fn bind_failure_async<S, L, L2, R, F, C>(source: S, on_failure: F) -> Deferred<Either<L2, R>>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    L2: Send + 'static,
    R: Send + 'static,
    F: FnOnce(L) -> C + Send + 'static,
    C: Computation<Output = Either<L2, R>>,
{
    source.into_deferred().flat_map(move |either| match either {
        Either::Left(failure) => on_failure(failure).into_deferred(),
        Either::Right(success) => Deferred::pure(Either::Right(success)),
    })
}

/// Transforms the success value; a failure passes through untouched.
pub fn map_success_async<S, L, R, F, C>(source: S, on_success: F) -> Deferred<Either<L, C::Output>>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
    F: FnOnce(R) -> C + Send + 'static,
    C: Computation,
{
    source.into_deferred().flat_map(move |either| match either {
        Either::Left(failure) => Deferred::pure(Either::Left(failure)),
        Either::Right(success) => on_success(success).into_deferred().map(Either::Right),
    })
}

/// Chains a fallible computation on the success value.
///
/// A `Left` short-circuits: `on_success` is not called.
pub fn bind_success_async<S, L, R, R2, F, C>(source: S, on_success: F) -> Deferred<Either<L, R2>>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
    R2: Send + 'static,
    F: FnOnce(R) -> C + Send + 'static,
    C: Computation<Output = Either<L, R2>>,
{
    source.into_deferred().flat_map(move |either| match either {
        Either::Left(failure) => Deferred::pure(Either::Left(failure)),
        Either::Right(success) => on_success(success).into_deferred(),
    })
}

/// Folds an `Either` computation; exactly one handler runs.
///
/// # Examples
///
/// ```rust
/// use fnext::control::Either;
/// use fnext::effect::{Deferred, match_async};
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let failed = Deferred::pure(Either::<i32, i32>::Left(10));
/// let folded = match_async(
///     failed,
///     |value| std::future::ready(value),
///     |code| async move { code * 10 },
/// );
///
/// assert_eq!(folded.await, 100);
/// # });
/// ```
pub fn match_async<S, L, R, O, FS, FF, CS, CF>(source: S, on_success: FS, on_failure: FF) -> Deferred<O>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
    O: Send + 'static,
    FS: FnOnce(R) -> CS + Send + 'static,
    FF: FnOnce(L) -> CF + Send + 'static,
    CS: Computation<Output = O>,
    CF: Computation<Output = O>,
{
    source.into_deferred().flat_map(move |either| match either {
        Either::Left(failure) => on_failure(failure).into_deferred(),
        Either::Right(success) => on_success(success).into_deferred(),
    })
}

/// Folds an `Either` computation with handlers that may produce no value.
///
/// A `None` from the selected handler is returned as is. Apart from the
/// handler result type this behaves like [`match_async`].
pub fn match_unsafe_async<S, L, R, O, FS, FF, CS, CF>(
    source: S,
    on_success: FS,
    on_failure: FF,
) -> Deferred<Option<O>>
where
    S: Computation<Output = Either<L, R>>,
    L: Send + 'static,
    R: Send + 'static,
    O: Send + 'static,
    FS: FnOnce(R) -> CS + Send + 'static,
    FF: FnOnce(L) -> CF + Send + 'static,
    CS: Computation<Output = Option<O>>,
    CF: Computation<Output = Option<O>>,
{
    match_async(source, on_success, on_failure)
}

// =============================================================================
// Optional Chaining
// =============================================================================

/// Transforms the present value of an `Optional` computation.
pub fn map_optional_async<S, T, F, C>(source: S, function: F) -> Deferred<Optional<C::Output>>
where
    S: Computation<Output = Optional<T>>,
    T: Send + 'static,
    F: FnOnce(T) -> C + Send + 'static,
    C: Computation,
{
    source.into_deferred().flat_map(move |optional| match optional {
        Optional::Present(value) => function(value).into_deferred().map(Optional::Present),
        Optional::Absent => Deferred::pure(Optional::Absent),
    })
}

/// Chains an `Optional` computation on the present value.
///
/// `Absent` short-circuits: `function` is not called.
pub fn bind_optional_async<S, T, U, F, C>(source: S, function: F) -> Deferred<Optional<U>>
where
    S: Computation<Output = Optional<T>>,
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> C + Send + 'static,
    C: Computation<Output = Optional<U>>,
{
    source.into_deferred().flat_map(move |optional| match optional {
        Optional::Present(value) => function(value).into_deferred(),
        Optional::Absent => Deferred::pure(Optional::Absent),
    })
}

/// Folds an `Optional` computation; exactly one handler runs.
pub fn match_optional_async<S, T, O, FP, FA, CP, CA>(
    source: S,
    on_present: FP,
    on_absent: FA,
) -> Deferred<O>
where
    S: Computation<Output = Optional<T>>,
    T: Send + 'static,
    O: Send + 'static,
    FP: FnOnce(T) -> CP + Send + 'static,
    FA: FnOnce() -> CA + Send + 'static,
    CP: Computation<Output = O>,
    CA: Computation<Output = O>,
{
    source.into_deferred().flat_map(move |optional| match optional {
        Optional::Present(value) => on_present(value).into_deferred(),
        Optional::Absent => on_absent().into_deferred(),
    })
}

/// Resolves to the present value, or to the result of `default` when absent.
pub fn if_absent_async<S, T, F, C>(source: S, default: F) -> Deferred<T>
where
    S: Computation<Output = Optional<T>>,
    T: Send + 'static,
    F: FnOnce() -> C + Send + 'static,
    C: Computation<Output = T>,
{
    match_optional_async(source, Deferred::pure, default)
}

/// Resolves to the present value, or to `default` when absent.
pub fn or_else_async<S, T>(source: S, default: T) -> Deferred<T>
where
    S: Computation<Output = Optional<T>>,
    T: Send + 'static,
{
    source.into_deferred().map(move |optional| optional.or_else(default))
}
