//! Unit tests for Either<L, R> type.
//!
//! Either carries one of two channels:
//! - `Left(L)`: the failure payload
//! - `Right(R)`: the success payload

#![cfg(feature = "control")]

use fnext::control::Either;
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
#[case(Either::Left(42), Some(42), None)]
#[case(Either::Right("hello"), None, Some("hello"))]
fn either_extraction(
    #[case] value: Either<i32, &str>,
    #[case] left: Option<i32>,
    #[case] right: Option<&str>,
) {
    assert_eq!(value.left_ref().copied(), left);
    assert_eq!(value.right_ref().copied(), right);
    assert_eq!(value.left(), left);
    assert_eq!(value.right(), right);
    assert_eq!(value.into_options(), (left, right));
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn either_map_left_on_left() {
    let value: Either<i32, String> = Either::Left(10);
    assert_eq!(value.map_left(|x| x * 2), Either::Left(20));
}

#[rstest]
fn either_map_right_on_left_is_untouched() {
    let mut calls = 0;
    let value: Either<i32, i32> = Either::Left(10);

    let mapped = value.map_right(|x| {
        calls += 1;
        x * 2
    });

    assert_eq!(mapped, Either::Left(10));
    assert_eq!(calls, 0);
}

#[rstest]
fn either_bimap_on_right() {
    let value: Either<i32, i32> = Either::Right(3);
    assert_eq!(value.bimap(|x| x - 1, |x| x + 1), Either::Right(4));
}

// =============================================================================
// Bind Operations
// =============================================================================

#[rstest]
fn either_bind_right_chains_successes() {
    let parse = |text: &str| -> Either<String, i32> {
        text.parse::<i32>().map_err(|error| error.to_string()).into()
    };

    let total = parse("4").bind_right(|first| parse("5").map_right(|second| first + second));
    assert_eq!(total, Either::Right(9));
}

#[rstest]
fn either_bind_right_short_circuits_on_left() {
    let mut calls = 0;
    let value: Either<&str, i32> = Either::Left("failed");

    let chained = value.bind_right(|x| {
        calls += 1;
        Either::Right(x + 1)
    });

    assert_eq!(chained, Either::Left("failed"));
    assert_eq!(calls, 0);
}

#[rstest]
#[case(Either::Left(404), Either::Right(0))]
#[case(Either::Left(500), Either::Left("500".to_string()))]
#[case(Either::Right(7), Either::Right(7))]
fn either_bind_left_recovers(#[case] value: Either<i32, i32>, #[case] expected: Either<String, i32>) {
    let recovered = value.bind_left(|status| {
        if status == 404 {
            Either::Right(0)
        } else {
            Either::Left(status.to_string())
        }
    });

    assert_eq!(recovered, expected);
}

// =============================================================================
// Fold Operations
// =============================================================================

#[rstest]
fn either_fold_and_match_with_agree() {
    let failure: Either<i32, String> = Either::Left(42);
    let success: Either<i32, String> = Either::Right("ok".to_string());

    assert_eq!(failure.clone().fold(|x| x.to_string(), |s| s), "42");
    assert_eq!(failure.match_with(|s| s, |x| x.to_string()), "42");
    assert_eq!(success.match_with(|s| s, |x| x.to_string()), "ok");
}

#[rstest]
fn either_if_left_and_if_right_run_one_side_effect() {
    let mut seen = Vec::new();

    let value: Either<i32, i32> = Either::Left(1);
    let value = value
        .if_left(|x| seen.push(format!("left {x}")))
        .if_right(|x| seen.push(format!("right {x}")));

    assert_eq!(value, Either::Left(1));
    assert_eq!(seen, vec!["left 1".to_string()]);
}

// =============================================================================
// Swap Operation
// =============================================================================

#[rstest]
fn either_swap_roundtrip() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.clone().swap(), Either::Right(42));
    assert_eq!(value.clone().swap().swap(), value);
}

// =============================================================================
// Result Conversions
// =============================================================================

#[rstest]
fn either_from_result() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("bad".to_string());

    assert_eq!(Either::from(ok), Either::Right(1));
    assert_eq!(Either::from(err), Either::Left("bad".to_string()));
}

// =============================================================================
// Hash
// =============================================================================

#[rstest]
fn either_hash_consistency() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(Either::<i32, i32>::Left(1));
    set.insert(Either::<i32, i32>::Left(1));
    set.insert(Either::<i32, i32>::Right(1));

    assert_eq!(set.len(), 2);
}
