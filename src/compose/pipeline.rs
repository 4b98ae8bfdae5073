//! Value-level transformation combinators.
//!
//! These functions thread a value through a transformation or a side
//! effect. The distinction that matters is what the callable returns:
//!
//! - [`tee`] takes `FnOnce(T) -> T`; the returned value replaces the input
//! - [`tap`] takes `FnOnce(&T)`; the input is returned untouched
//!
//! The [`Pipeline`] extension trait offers the same operations in method form.
//!
//! # Examples
//!
//! ```rust
//! use fnext::compose::Pipeline;
//!
//! let mut seen = Vec::new();
//!
//! let result = 5_i32
//!     .tap(|value| seen.push(*value))
//!     .tee_when(|value| value * 10, |value| *value > 3)
//!     .pipe(|value| value.to_string());
//!
//! assert_eq!(result, "50");
//! assert_eq!(seen, vec![5]);
//! ```

/// Applies `function` to `value`.
#[inline]
pub fn map<T, U, F>(value: T, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    function(value)
}

/// Applies the same function to both halves of a pair.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::same_map;
///
/// assert_eq!(same_map((10, 37), |x| x.to_string()), ("10".to_string(), "37".to_string()));
/// ```
#[inline]
pub fn same_map<T, U, F>(pair: (T, T), function: F) -> (U, U)
where
    F: Fn(T) -> U,
{
    (function(pair.0), function(pair.1))
}

/// Consumes `value` with an action that produces nothing.
#[inline]
pub fn apply<T, F>(value: T, action: F)
where
    F: FnOnce(T),
{
    action(value);
}

/// Transforms `value` and returns the transformed value.
#[inline]
pub fn tee<T, F>(value: T, transform: F) -> T
where
    F: FnOnce(T) -> T,
{
    transform(value)
}

/// Runs a side effect on `value` and returns the same value.
///
/// # Examples
///
/// ```rust
/// use fnext::compose::tap;
///
/// let mut calls = 0;
/// let value = tap(vec![1, 2], |_| calls += 1);
///
/// assert_eq!(value, vec![1, 2]);
/// assert_eq!(calls, 1);
/// ```
#[inline]
pub fn tap<T, F>(value: T, action: F) -> T
where
    F: FnOnce(&T),
{
    action(&value);
    value
}

/// Transforms `value` only when `when(&value)` holds.
///
/// The predicate sees the value before the transformation.
#[inline]
pub fn tee_when<T, F, P>(value: T, transform: F, when: P) -> T
where
    F: FnOnce(T) -> T,
    P: FnOnce(&T) -> bool,
{
    if when(&value) { transform(value) } else { value }
}

/// Transforms `value` only when the argument-less predicate holds.
#[inline]
pub fn tee_when_with<T, F, P>(value: T, transform: F, when: P) -> T
where
    F: FnOnce(T) -> T,
    P: FnOnce() -> bool,
{
    if when() { transform(value) } else { value }
}

/// Method-call form of the pipeline combinators, implemented for every type.
pub trait Pipeline: Sized {
    /// Applies `function` to `self`. See [`map`].
    #[inline]
    fn pipe<U, F>(self, function: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        map(self, function)
    }

    /// Consumes `self` with an action. See [`apply`].
    #[inline]
    fn apply<F>(self, action: F)
    where
        F: FnOnce(Self),
    {
        apply(self, action);
    }

    /// See [`tee`].
    #[inline]
    #[must_use]
    fn tee<F>(self, transform: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        tee(self, transform)
    }

    /// See [`tap`].
    #[inline]
    #[must_use]
    fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        tap(self, action)
    }

    /// See [`tee_when`].
    #[inline]
    #[must_use]
    fn tee_when<F, P>(self, transform: F, when: P) -> Self
    where
        F: FnOnce(Self) -> Self,
        P: FnOnce(&Self) -> bool,
    {
        tee_when(self, transform, when)
    }

    /// See [`tee_when_with`].
    #[inline]
    #[must_use]
    fn tee_when_with<F, P>(self, transform: F, when: P) -> Self
    where
        F: FnOnce(Self) -> Self,
        P: FnOnce() -> bool,
    {
        tee_when_with(self, transform, when)
    }
}

impl<T> Pipeline for T {}
