//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A thunk that always returns the same value (K combinator)
//!
//! Both show up constantly when folding: `identity` collapses a channel that
//! already has the output type, and `constant` builds failure thunks.

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use fnext::compose::identity;
/// use fnext::control::Either;
///
/// let either: Either<i32, i32> = Either::Left(7);
/// assert_eq!(either.fold(identity, identity), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a zero-argument function that always returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use fnext::compose::{constant, to_either_with};
/// use fnext::control::Either;
///
/// let either: Either<u16, &str> = to_either_with(None, constant(404));
/// assert_eq!(either, Either::Left(404));
/// ```
#[inline]
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}
