//! Either type - a two-sided success/failure value.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. Throughout this crate the
//! sides carry a fixed meaning:
//!
//! - `Left` is the failure channel (an error code, a domain error, ...)
//! - `Right` is the success channel
//!
//! Failures only recover when a caller explicitly reaches for a
//! failure-side operation (`map_left`, `bind_left`); every other operation
//! passes them through untouched.
//!
//! # Examples
//!
//! ```rust
//! use fnext::control::Either;
//!
//! let success: Either<u16, String> = Either::Right("ok".to_string());
//! let failure: Either<u16, String> = Either::Left(500);
//!
//! let describe = |either: Either<u16, String>| {
//!     either.match_with(|body| body, |status| format!("status {status}"))
//! };
//!
//! assert_eq!(describe(success), "ok");
//! assert_eq!(describe(failure), "status 500");
//! ```

use std::fmt;

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The type of the failure payload
/// * `R` - The type of the success payload
///
/// # Examples
///
/// ```rust
/// use fnext::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map_right(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Splits into a pair of options, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the failure value only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(10);
    /// assert_eq!(left.map_left(|x| x * 10), Either::Left(100));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 10), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the success value only.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Bind Operations
    // =========================================================================

    /// Chains a fallible computation on the success value.
    ///
    /// A `Left` short-circuits: `function` is not called.
    #[inline]
    pub fn bind_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Chains a computation on the failure value, which may recover to `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Either;
    ///
    /// let recovered: Either<String, i32> =
    ///     Either::<i32, i32>::Left(404).bind_left(|status| {
    ///         if status == 404 { Either::Right(0) } else { Either::Left(status.to_string()) }
    ///     });
    /// assert_eq!(recovered, Either::Right(0));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Folds both channels, success handler first.
    ///
    /// Same as [`Either::fold`] with the arguments in success/failure order.
    #[inline]
    pub fn match_with<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(R) -> T,
        G: FnOnce(L) -> T,
    {
        self.fold(on_failure, on_success)
    }

    /// Runs a side effect on the failure value and returns the either unchanged.
    #[inline]
    #[must_use]
    pub fn if_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side effect on the success value and returns the either unchanged.
    #[inline]
    #[must_use]
    pub fn if_right<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
