//! Integration tests for the documented `Maybe` scenarios.
//!
//! These tests verify that:
//! - Chained map/and_then produce the expected present value
//! - Records can be built field by field with assign
//! - sequence/traverse short-circuit on absence
//! - filter/exists treat absence as false

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![allow(clippy::arithmetic_side_effects)]

use maybe::prelude::*;
use serde_json::{Map, Value, json};

/// Chained transformations accumulate on a present value.
///
/// # GIVEN
/// `just(1)`
///
/// # WHEN
/// Mapped with `+1` and chained with `x => just(x + 1)`
///
/// # THEN
/// Result is `just(3)`
#[test]
fn test_map_then_and_then_yields_three() {
    let result = Maybe::just(1)
        .map(|x| x + 1)
        .and_then(|x| Maybe::just(x + 1));

    assert_eq!(result, Maybe::just(3));
}

/// Assign builds a heterogeneous record one field at a time.
///
/// # GIVEN
/// An empty JSON object
///
/// # WHEN
/// `a` is assigned `1` and `b` is assigned `"hello"`
///
/// # THEN
/// Result is `just({a: 1, b: "hello"})`
#[test]
fn test_assign_builds_record() {
    let record = Maybe::just(Map::new())
        .assign("a", Maybe::just(1_i32))
        .assign("b", Maybe::just("hello"));

    assert_eq!(
        record.map(Value::Object),
        Maybe::just(json!({ "a": 1, "b": "hello" }))
    );
}

/// A single absent field makes the whole record absent.
#[test]
fn test_assign_absent_field_is_absent() {
    let record = Maybe::just(Map::new()).assign("a", Maybe::<i32>::nothing());

    assert_eq!(record, Maybe::nothing());
}

/// A field computed from earlier fields.
#[test]
fn test_assign_with_derives_from_record() {
    let record = Maybe::just(Map::new())
        .assign("first", Maybe::just("Ada"))
        .assign("last", Maybe::just("Lovelace"))
        .assign_with("full", |fields: &Map<String, Value>| {
            let first = from_nullable(fields.get("first").and_then(Value::as_str));
            let last = from_nullable(fields.get("last").and_then(Value::as_str));
            first.and_then(|f| last.map(|l| format!("{f} {l}")))
        });

    assert_eq!(
        record.and_then(|fields| from_nullable(fields.get("full").cloned())),
        Maybe::just(json!("Ada Lovelace"))
    );
}

/// Sequence is present only when every element is.
#[test]
fn test_sequence_scenarios() {
    assert_eq!(
        sequence([Maybe::just(1), Maybe::just(2), Maybe::just(3)]),
        Maybe::just(vec![1, 2, 3])
    );
    assert_eq!(
        sequence([Maybe::just(1), Maybe::nothing(), Maybe::just(3)]),
        Maybe::nothing()
    );
}

/// Traverse applies the function then sequences.
#[test]
fn test_traverse_scenarios() {
    let evens = |n: i32| {
        if n % 2 == 0 {
            Maybe::just(n)
        } else {
            Maybe::nothing()
        }
    };

    assert_eq!(traverse(evens, [1, 2, 3]), Maybe::nothing());
    assert_eq!(
        traverse(|n| Maybe::just(n * 2), [1, 2, 3]),
        Maybe::just(vec![2, 4, 6])
    );
}

/// Filter rejects, exists on absence is false.
#[test]
fn test_filter_and_exists_scenarios() {
    assert_eq!(Maybe::just(5).filter(|x| *x > 10), Maybe::nothing());
    assert!(!Maybe::<i32>::nothing().exists(|x| *x > 3));
}

/// Curried functions read left to right.
#[test]
fn test_curried_pipeline() {
    let describe = curried::cata(matcher(|n: i32| format!("{n} items"), || String::from("empty")));

    let described = ["3", "", "x", "12"]
        .iter()
        .map(|raw| from_empty(*raw))
        .map(curried::and_then(|raw: &str| raw.parse::<i32>().into_maybe()))
        .map(curried::filter(|n: &i32| *n > 0))
        .map(&describe)
        .collect_vec();

    assert_eq!(described, vec!["3 items", "empty", "empty", "12 items"]);
}
