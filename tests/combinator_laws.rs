#![cfg(feature = "effect")]
//! Property-based tests for the combinator laws.
//!
//! - Conversion: `to_optional(Some(v)) == Present(v)`, `to_optional(None) == Absent`
//! - Predicate: `to_optional_when(Some(v), p)` is absent exactly when `p(&v)`
//! - Either projection: `to_either(v, f)` agrees with `to_optional(v).to_either(f)`
//! - Identity: `tee_when(v, f, |_| false) == v` and `tap(v, _) == v`
//! - Deferred: `pure(a).flat_map(f) == f(a)` and `m.map(id) == m`
//! - Sync/async agreement: every async conversion equals its sync counterpart

use fnext::compose::{identity, tap, tee_when, to_either, to_optional, to_optional_map, to_optional_when};
use fnext::control::{Either, Optional};
use fnext::effect::{Deferred, match_async, to_either_async, to_optional_async_map};
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

// =============================================================================
// Conversion Laws
// =============================================================================

proptest! {
    /// Null is absent, anything else is present.
    #[test]
    fn prop_to_optional_mirrors_option(value: Option<i32>) {
        let optional = to_optional(value);

        prop_assert_eq!(optional.is_present(), value.is_some());
        prop_assert_eq!(optional.into_option(), value);
    }

    /// The predicate alone decides absence of a non-null value.
    #[test]
    fn prop_to_optional_when_absent_iff_predicate(value: i32) {
        let optional = to_optional_when(Some(value), |v| v % 3 == 0);

        prop_assert_eq!(optional.is_absent(), value % 3 == 0);
    }

    /// Either conversion is the optional conversion folded with the failure.
    #[test]
    fn prop_to_either_agrees_with_optional(value: Option<i32>, failure: String) {
        let direct: Either<String, i32> = to_either(value, failure.clone());
        let via_optional = to_optional(value).to_either(failure);

        prop_assert_eq!(direct, via_optional);
    }

    /// `or_else` returns the payload when present and the default otherwise.
    #[test]
    fn prop_or_else_total(value: Option<i32>, default: i32) {
        prop_assert_eq!(to_optional(value).or_else(default), value.unwrap_or(default));
    }
}

// =============================================================================
// Pipeline Laws
// =============================================================================

proptest! {
    /// A tee that never fires is the identity.
    #[test]
    fn prop_tee_when_false_is_identity(value: String) {
        let result = tee_when(value.clone(), |_| String::from("changed"), |_| false);
        prop_assert_eq!(result, value);
    }

    /// Tap never alters the value.
    #[test]
    fn prop_tap_is_identity(values: Vec<u8>) {
        let mut seen = 0;
        let result = tap(values.clone(), |values| seen = values.len());

        prop_assert_eq!(seen, values.len());
        prop_assert_eq!(result, values);
    }
}

// =============================================================================
// Deferred Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_deferred_left_identity(value: i32) {
        let function = |n: i32| Deferred::pure(n.wrapping_mul(2));

        let left = block_on(Deferred::pure(value).flat_map(function));
        let right = block_on(function(value));

        prop_assert_eq!(left, right);
    }

    /// Functor Identity Law: m.map(identity) == m
    #[test]
    fn prop_deferred_map_identity(value: i32) {
        prop_assert_eq!(block_on(Deferred::pure(value).map(identity)), value);
    }

    /// Async conversion with a map agrees with the synchronous one.
    #[test]
    fn prop_async_optional_map_agrees_with_sync(value: Option<i16>) {
        let is_negative = |v: &i16| *v < 0;
        let widen = |v: i16| i32::from(v) * 2;

        let synchronous = to_optional_map(value, widen, is_negative);
        let asynchronous = block_on(to_optional_async_map(std::future::ready(value), widen, is_negative));

        prop_assert_eq!(asynchronous, synchronous);
    }

    /// Folding an async either runs the same branch as the synchronous fold.
    #[test]
    fn prop_match_async_agrees_with_fold(value: Option<u8>) {
        let either = to_either_async(std::future::ready(value), "absent");
        let folded = block_on(match_async(
            either,
            |v| std::future::ready(Optional::Present(v)),
            |_| std::future::ready(Optional::Absent),
        ));

        prop_assert_eq!(folded, to_optional(value));
    }
}
