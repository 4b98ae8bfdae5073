//! Tests for the value-level transformation combinators.

#![cfg(feature = "compose")]

use fnext::compose::{Pipeline, apply, identity, map, same_map, tap, tee, tee_when, tee_when_with};
use rstest::rstest;

// =============================================================================
// map / same_map / apply
// =============================================================================

#[rstest]
fn map_applies_function() {
    assert_eq!(map(4, |x| x * x), 16);
    assert_eq!(map("keep", identity), "keep");
}

#[rstest]
fn same_map_applies_to_both_halves() {
    let (first, second) = same_map(("a", "bcd"), str::len);
    assert_eq!((first, second), (1, 3));
}

#[rstest]
fn apply_consumes_the_value() {
    let mut sink = Vec::new();
    apply(vec![1, 2, 3], |values| sink.extend(values));
    assert_eq!(sink, vec![1, 2, 3]);
}

// =============================================================================
// tee / tap
// =============================================================================

#[rstest]
fn tee_replaces_the_value() {
    assert_eq!(tee(String::from("a"), |text| text + "b"), "ab");
}

#[rstest]
fn tap_returns_the_same_value() {
    let mut observed = None;
    let value = tap(vec![1, 2], |values| observed = Some(values.len()));

    assert_eq!(value, vec![1, 2]);
    assert_eq!(observed, Some(2));
}

// =============================================================================
// tee_when / tee_when_with
// =============================================================================

#[rstest]
#[case(5, 50)]
#[case(2, 2)]
fn tee_when_transforms_only_when_predicate_holds(#[case] value: i32, #[case] expected: i32) {
    assert_eq!(tee_when(value, |x| x * 10, |x| *x > 3), expected);
}

#[rstest]
fn tee_when_false_is_identity_and_skips_transform() {
    let mut calls = 0;
    let value = tee_when(
        "unchanged",
        |text| {
            calls += 1;
            text
        },
        |_| false,
    );

    assert_eq!(value, "unchanged");
    assert_eq!(calls, 0);
}

#[rstest]
#[case(true, "[x]")]
#[case(false, "x")]
fn tee_when_with_uses_argument_less_predicate(#[case] enabled: bool, #[case] expected: &str) {
    let value = tee_when_with("x".to_string(), |text| format!("[{text}]"), || enabled);
    assert_eq!(value, expected);
}

// =============================================================================
// Pipeline Trait
// =============================================================================

#[rstest]
fn pipeline_methods_chain() {
    let mut log = Vec::new();

    let result = 3_i32
        .tap(|value| log.push(*value))
        .tee(|value| value + 1)
        .tee_when(|value| value * 2, |value| *value == 4)
        .tee_when_with(|value| value - 100, || false)
        .pipe(|value| value.to_string());

    assert_eq!(result, "8");
    assert_eq!(log, vec![3]);
}

#[rstest]
fn pipeline_apply_runs_action() {
    let mut total = 0;
    (2_i32, 3_i32).apply(|(a, b)| total = a + b);
    assert_eq!(total, 5);
}
