//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! `Present(T)` value or `Absent`. Unlike a nullable reference, an
//! `Optional` never wraps a missing value: conversions from nullable sources
//! (modelled as `Option<T>`, where `None` is the null) always produce
//! `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use fnext::control::Optional;
//!
//! let present = Optional::Present(42);
//! let absent: Optional<i32> = Optional::Absent;
//!
//! assert_eq!(present.or_else(0), 42);
//! assert_eq!(absent.or_else(0), 0);
//! ```

use std::fmt;

use super::Either;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use fnext::control::Optional;
///
/// let doubled = Optional::Present(21).map(|x| x * 2);
/// assert_eq!(doubled, Optional::Present(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Optional;
    ///
    /// assert!(Optional::Present(1).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<T>`, consuming the optional.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns a reference to the present value, if any.
    #[inline]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns the present value or the given default.
    ///
    /// Total: never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Optional;
    ///
    /// assert_eq!(Optional::Present("value").or_else("default"), "value");
    /// assert_eq!(Optional::Absent.or_else("default"), "default");
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the present value or computes a default.
    ///
    /// The default function runs only when the optional is absent.
    #[inline]
    pub fn or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// The function is never called on `Absent`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Absent };
    ///
    /// assert_eq!(Optional::Present(8).bind(half), Optional::Present(4));
    /// assert_eq!(Optional::Present(7).bind(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the value only if it does not satisfy `absent_when`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, absent_when: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if absent_when(&value) {
                    Self::Absent
                } else {
                    Self::Present(value)
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the optional by applying one of two functions.
    ///
    /// Exactly one of the functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::Optional;
    ///
    /// let describe = |optional: Optional<i32>| {
    ///     optional.match_with(|x| format!("got {x}"), || "nothing".to_string())
    /// };
    ///
    /// assert_eq!(describe(Optional::Present(1)), "got 1");
    /// assert_eq!(describe(Optional::Absent), "nothing");
    /// ```
    #[inline]
    pub fn match_with<U, F, G>(self, on_present: F, on_absent: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Runs a side effect on the present value and returns the optional unchanged.
    #[inline]
    #[must_use]
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Runs a side effect when absent and returns the optional unchanged.
    #[inline]
    #[must_use]
    pub fn if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    // =========================================================================
    // Conversion to Either
    // =========================================================================

    /// Projects into an `Either`, using `failure` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::control::{Either, Optional};
    ///
    /// assert_eq!(Optional::Present(1).to_either("missing"), Either::Right(1));
    /// assert_eq!(Optional::<i32>::Absent.to_either("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, failure: L) -> Either<L, T> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(failure),
        }
    }

    /// Projects into an `Either`, computing the failure only when absent.
    #[inline]
    pub fn to_either_with<L, F>(self, failure: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(failure()),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
