//! Conversions from nullable values into [`Optional`] and [`Either`].
//!
//! A nullable source is an `Option<T>`: `None` plays the role of null. Every
//! conversion first decides presence (null check plus an optional
//! absent-when predicate), then maps the payload, then folds into the target
//! shape. Mapping functions and failure thunks are only called on the branch
//! that needs them.
//!
//! # Examples
//!
//! ```rust
//! use fnext::compose::{to_either_when, to_optional_map};
//! use fnext::control::{Either, Optional};
//!
//! let name: Option<&str> = Some("  ");
//!
//! assert_eq!(
//!     to_optional_map(name, str::len, |name| name.trim().is_empty()),
//!     Optional::Absent
//! );
//! assert_eq!(
//!     to_either_when(Some(3), |count| *count == 0, "empty"),
//!     Either::Right(3)
//! );
//! ```

use crate::control::{Either, Optional};

// =============================================================================
// Optional Conversions
// =============================================================================

/// Converts a nullable value into an [`Optional`].
///
/// # Examples
///
/// ```rust
/// use fnext::compose::to_optional;
/// use fnext::control::Optional;
///
/// assert_eq!(to_optional(Some(1)), Optional::Present(1));
/// assert_eq!(to_optional::<i32>(None), Optional::Absent);
/// ```
#[inline]
pub fn to_optional<T>(value: Option<T>) -> Optional<T> {
    Optional::from(value)
}

/// Converts a nullable value into an [`Optional`], treating values matched by
/// `absent_when` as absent.
///
/// The predicate is not called for `None`.
#[inline]
pub fn to_optional_when<T, P>(value: Option<T>, absent_when: P) -> Optional<T>
where
    P: FnOnce(&T) -> bool,
{
    to_optional(value).filter(absent_when)
}

/// Like [`to_optional_when`], then maps the present payload.
///
/// The predicate sees the unmapped value, and `map` runs at most once.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::to_optional_map;
/// use fnext::control::Optional;
///
/// let lengths = to_optional_map(Some("fnext"), str::len, |text| text.is_empty());
/// assert_eq!(lengths, Optional::Present(5));
/// ```
#[inline]
pub fn to_optional_map<T, U, F, P>(value: Option<T>, map: F, absent_when: P) -> Optional<U>
where
    F: FnOnce(T) -> U,
    P: FnOnce(&T) -> bool,
{
    to_optional_when(value, absent_when).map(map)
}

/// Predicate-driven absence for values that cannot be null.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::present_unless;
/// use fnext::control::Optional;
///
/// assert_eq!(present_unless(0, |count| *count == 0), Optional::Absent);
/// assert_eq!(present_unless(4, |count| *count == 0), Optional::Present(4));
/// ```
#[inline]
pub fn present_unless<T, P>(value: T, absent_when: P) -> Optional<T>
where
    P: FnOnce(&T) -> bool,
{
    to_optional_when(Some(value), absent_when)
}

/// Method form of the optional conversions on `Option<T>`.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::ToOptional;
/// use fnext::control::Optional;
///
/// let cached: Option<Vec<u8>> = Some(Vec::new());
/// assert_eq!(cached.to_optional_when(Vec::is_empty), Optional::Absent);
/// ```
pub trait ToOptional<T> {
    /// See [`to_optional`].
    fn to_optional(self) -> Optional<T>;

    /// See [`to_optional_when`].
    fn to_optional_when<P>(self, absent_when: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool;

    /// See [`to_optional_map`].
    fn to_optional_map<U, F, P>(self, map: F, absent_when: P) -> Optional<U>
    where
        F: FnOnce(T) -> U,
        P: FnOnce(&T) -> bool;
}

impl<T> ToOptional<T> for Option<T> {
    #[inline]
    fn to_optional(self) -> Optional<T> {
        to_optional(self)
    }

    #[inline]
    fn to_optional_when<P>(self, absent_when: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        to_optional_when(self, absent_when)
    }

    #[inline]
    fn to_optional_map<U, F, P>(self, map: F, absent_when: P) -> Optional<U>
    where
        F: FnOnce(T) -> U,
        P: FnOnce(&T) -> bool,
    {
        to_optional_map(self, map, absent_when)
    }
}

// =============================================================================
// Either Conversions
// =============================================================================

/// Converts a nullable value into an [`Either`], using `failure` for `None`.
#[inline]
pub fn to_either<T, L>(value: Option<T>, failure: L) -> Either<L, T> {
    to_either_with(value, move || failure)
}

/// Like [`to_either`], also failing when `failure_when` matches the value.
#[inline]
pub fn to_either_when<T, L, P>(value: Option<T>, failure_when: P, failure: L) -> Either<L, T>
where
    P: FnOnce(&T) -> bool,
{
    to_either_when_with(value, failure_when, move || failure)
}

/// Like [`to_either_when`], then maps the success payload.
#[inline]
pub fn to_either_map<T, U, L, F, P>(
    value: Option<T>,
    map: F,
    failure_when: P,
    failure: L,
) -> Either<L, U>
where
    F: FnOnce(T) -> U,
    P: FnOnce(&T) -> bool,
{
    to_either_map_with(value, map, failure_when, move || failure)
}

/// Converts a nullable value into an [`Either`], calling `failure` only for
/// `None`.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::to_either_with;
/// use fnext::control::Either;
///
/// let mut built = 0;
/// let either: Either<String, i32> = to_either_with(Some(1), || {
///     built += 1;
///     "missing".to_string()
/// });
///
/// assert_eq!(either, Either::Right(1));
/// assert_eq!(built, 0);
/// ```
#[inline]
pub fn to_either_with<T, L, G>(value: Option<T>, failure: G) -> Either<L, T>
where
    G: FnOnce() -> L,
{
    to_optional(value).to_either_with(failure)
}

/// Thunk form of [`to_either_when`].
#[inline]
pub fn to_either_when_with<T, L, P, G>(value: Option<T>, failure_when: P, failure: G) -> Either<L, T>
where
    P: FnOnce(&T) -> bool,
    G: FnOnce() -> L,
{
    to_optional_when(value, failure_when).to_either_with(failure)
}

/// Thunk form of [`to_either_map`].
#[inline]
pub fn to_either_map_with<T, U, L, F, P, G>(
    value: Option<T>,
    map: F,
    failure_when: P,
    failure: G,
) -> Either<L, U>
where
    F: FnOnce(T) -> U,
    P: FnOnce(&T) -> bool,
    G: FnOnce() -> L,
{
    to_optional_map(value, map, failure_when).to_either_with(failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Optional::Absent)]
    #[case(Some(0), Optional::Absent)]
    #[case(Some(5), Optional::Present(5))]
    fn test_to_optional_when_zero_is_absent(
        #[case] value: Option<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(to_optional_when(value, |number| *number == 0), expected);
    }

    #[rstest]
    fn test_predicate_not_called_for_none() {
        let mut calls = 0;
        let result = to_optional_when(None::<i32>, |_| {
            calls += 1;
            false
        });

        assert_eq!(result, Optional::Absent);
        assert_eq!(calls, 0);
    }
}
