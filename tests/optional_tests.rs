//! Unit tests for the Optional<T> type.
//!
//! Optional has two states:
//! - `Present(T)`: a value is available
//! - `Absent`: no value

#![cfg(feature = "control")]

use fnext::control::{Either, Optional};
use rstest::rstest;

// =============================================================================
// Type Checking
// =============================================================================

#[rstest]
fn optional_present_is_present() {
    let value = Optional::Present("hello");
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn optional_absent_is_absent() {
    let value: Optional<&str> = Optional::Absent;
    assert!(value.is_absent());
    assert_eq!(value.present(), None);
}

// =============================================================================
// Defaults
// =============================================================================

#[rstest]
#[case(Optional::Present(5), 5)]
#[case(Optional::Absent, 0)]
fn optional_or_else(#[case] value: Optional<i32>, #[case] expected: i32) {
    assert_eq!(value.or_else(0), expected);
}

#[rstest]
fn optional_or_else_with_is_lazy_when_present() {
    let mut calls = 0;
    let value = Optional::Present(1).or_else_with(|| {
        calls += 1;
        0
    });

    assert_eq!(value, 1);
    assert_eq!(calls, 0);
}

#[rstest]
fn optional_or_else_with_runs_once_when_absent() {
    let mut calls = 0;
    let value = Optional::Absent.or_else_with(|| {
        calls += 1;
        9
    });

    assert_eq!(value, 9);
    assert_eq!(calls, 1);
}

// =============================================================================
// Mapping and Binding
// =============================================================================

#[rstest]
fn optional_map_never_called_on_absent() {
    let mut calls = 0;
    let mapped = Optional::<i32>::Absent.map(|x| {
        calls += 1;
        x + 1
    });

    assert_eq!(mapped, Optional::Absent);
    assert_eq!(calls, 0);
}

#[rstest]
#[case(Optional::Present(4), Optional::Present(2))]
#[case(Optional::Present(3), Optional::Absent)]
#[case(Optional::Absent, Optional::Absent)]
fn optional_bind_half(#[case] value: Optional<i32>, #[case] expected: Optional<i32>) {
    let half = |x: i32| {
        if x % 2 == 0 {
            Optional::Present(x / 2)
        } else {
            Optional::Absent
        }
    };

    assert_eq!(value.bind(half), expected);
}

#[rstest]
#[case(Optional::Present(vec![1]), Optional::Present(vec![1]))]
#[case(Optional::Present(vec![]), Optional::Absent)]
#[case(Optional::Absent, Optional::Absent)]
fn optional_filter_empty_is_absent(#[case] value: Optional<Vec<i32>>, #[case] expected: Optional<Vec<i32>>) {
    assert_eq!(value.filter(Vec::is_empty), expected);
}

// =============================================================================
// Folding and Side Effects
// =============================================================================

#[rstest]
fn optional_match_with_runs_exactly_one_branch() {
    let mut present_calls = 0;
    let mut absent_calls = 0;

    let result = Optional::Present(2).match_with(
        |x| {
            present_calls += 1;
            x * 10
        },
        || {
            absent_calls += 1;
            0
        },
    );

    assert_eq!(result, 20);
    assert_eq!((present_calls, absent_calls), (1, 0));
}

#[rstest]
fn optional_if_present_and_if_absent() {
    let mut log = Vec::new();

    let value = Optional::Present(3)
        .if_present(|x| log.push(format!("present {x}")))
        .if_absent(|| log.push("absent".to_string()));

    let missing = Optional::<i32>::Absent
        .if_present(|x| log.push(format!("present {x}")))
        .if_absent(|| log.push("absent".to_string()));

    assert_eq!(value, Optional::Present(3));
    assert_eq!(missing, Optional::Absent);
    assert_eq!(log, vec!["present 3".to_string(), "absent".to_string()]);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn optional_to_either_with_is_lazy() {
    let mut calls = 0;
    let either: Either<String, i32> = Optional::Present(1).to_either_with(|| {
        calls += 1;
        "missing".to_string()
    });

    assert_eq!(either, Either::Right(1));
    assert_eq!(calls, 0);
}

#[rstest]
fn optional_as_ref_keeps_owner() {
    let owned = Optional::Present("text".to_string());
    let borrowed = owned.as_ref().map(String::len);

    assert_eq!(borrowed, Optional::Present(4));
    assert_eq!(owned.into_option(), Some("text".to_string()));
}

#[rstest]
fn optional_into_iterator() {
    let collected: Vec<i32> = Optional::Present(1)
        .into_iter()
        .chain(Optional::Absent)
        .chain(Optional::Present(3))
        .collect();

    assert_eq!(collected, vec![1, 3]);
}
