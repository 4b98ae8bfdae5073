//! Tests for nullable-to-Optional and nullable-to-Either conversions.

#![cfg(feature = "compose")]

use fnext::compose::{
    ToOptional, constant, present_unless, to_either, to_either_map, to_either_map_with,
    to_either_when, to_either_when_with, to_either_with, to_optional, to_optional_map,
    to_optional_when,
};
use fnext::control::{Either, Optional};
use rstest::rstest;

// =============================================================================
// Optional Conversions
// =============================================================================

#[rstest]
#[case(Some("value"), Optional::Present("value"))]
#[case(None, Optional::Absent)]
fn to_optional_null_is_absent(#[case] value: Option<&str>, #[case] expected: Optional<&str>) {
    assert_eq!(to_optional(value), expected);
}

#[rstest]
#[case(Some(String::new()), Optional::Absent)]
#[case(Some("x".to_string()), Optional::Present("x".to_string()))]
#[case(None, Optional::Absent)]
fn to_optional_when_empty_string(#[case] value: Option<String>, #[case] expected: Optional<String>) {
    assert_eq!(to_optional_when(value, String::is_empty), expected);
}

#[rstest]
fn to_optional_map_calls_map_once_when_present() {
    let mut calls = 0;
    let result = to_optional_map(
        Some(5),
        |value| {
            calls += 1;
            value * 2
        },
        |_| false,
    );

    assert_eq!(result, Optional::Present(10));
    assert_eq!(calls, 1);
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn to_optional_map_never_maps_absent_values(#[case] value: Option<i32>) {
    let mut calls = 0;
    let result = to_optional_map(
        value,
        |value| {
            calls += 1;
            value * 2
        },
        |value| *value == 0,
    );

    assert_eq!(result, Optional::Absent);
    assert_eq!(calls, 0);
}

#[rstest]
fn to_optional_map_predicate_sees_unmapped_value() {
    let result = to_optional_map(Some(3), |value| value * 100, |value| *value > 10);
    assert_eq!(result, Optional::Present(300));
}

#[rstest]
#[case(0, Optional::Absent)]
#[case(1, Optional::Present(1))]
fn present_unless_zero(#[case] value: u32, #[case] expected: Optional<u32>) {
    assert_eq!(present_unless(value, |value| *value == 0), expected);
}

#[rstest]
fn to_optional_method_forms_match_functions() {
    assert_eq!(Some(1).to_optional(), to_optional(Some(1)));
    assert_eq!(Some(0).to_optional_when(|v| *v == 0), Optional::Absent);
    assert_eq!(
        Some("ab").to_optional_map(str::len, |v| v.is_empty()),
        Optional::Present(2)
    );
}

// =============================================================================
// Either Conversions
// =============================================================================

#[rstest]
#[case(Some(1), Either::Right(1))]
#[case(None, Either::Left("missing"))]
fn to_either_null_is_failure(#[case] value: Option<i32>, #[case] expected: Either<&str, i32>) {
    assert_eq!(to_either(value, "missing"), expected);
}

#[rstest]
#[case(Some(-1), Either::Left(400))]
#[case(Some(2), Either::Right(2))]
#[case(None, Either::Left(400))]
fn to_either_when_negative(#[case] value: Option<i32>, #[case] expected: Either<u16, i32>) {
    assert_eq!(to_either_when(value, |v| *v < 0, 400), expected);
    assert_eq!(to_either_when_with(value, |v| *v < 0, constant(400)), expected);
}

#[rstest]
fn to_either_map_maps_success_only() {
    let success = to_either_map(Some("42"), |text| text.len(), |text| text.is_empty(), "empty");
    let failure = to_either_map(Some(""), |text| text.len(), |text| text.is_empty(), "empty");

    assert_eq!(success, Either::Right(2));
    assert_eq!(failure, Either::Left("empty"));
}

#[rstest]
fn to_either_with_calls_thunk_only_when_absent() {
    let mut calls = 0;

    let present: Either<String, i32> = to_either_with(Some(1), || {
        calls += 1;
        "missing".to_string()
    });
    assert_eq!(calls, 0);

    let absent: Either<String, i32> = to_either_with(None, || {
        calls += 1;
        "missing".to_string()
    });

    assert_eq!(present, Either::Right(1));
    assert_eq!(absent, Either::Left("missing".to_string()));
    assert_eq!(calls, 1);
}

#[rstest]
fn to_either_map_with_skips_map_and_thunk_appropriately() {
    let mut maps = 0;
    let mut failures = 0;

    let result: Either<&str, i32> = to_either_map_with(
        Some(0),
        |value| {
            maps += 1;
            value + 1
        },
        |value| *value == 0,
        || {
            failures += 1;
            "zero"
        },
    );

    assert_eq!(result, Either::Left("zero"));
    assert_eq!((maps, failures), (0, 1));
}
