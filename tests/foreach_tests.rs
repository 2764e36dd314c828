//! Tests for `foreach`, the presence-gated side effect.

#![cfg(feature = "infix")]

use absent::syntax::NullableExt;
use absent::{fmap, foreach};
use rstest::rstest;
use std::cell::RefCell;

#[rstest]
#[case(None, 0)]
#[case(Some(1), 1)]
#[case(Some(-100), 1)]
fn effect_runs_once_per_present_value(#[case] input: Option<i32>, #[case] expected: usize) {
    let mut calls = 0;
    foreach(&input, |_| calls += 1);
    assert_eq!(calls, expected);
}

#[rstest]
fn effect_receives_contained_value() {
    let received = RefCell::new(Vec::new());
    foreach(&Some("first"), |text| received.borrow_mut().push(*text));
    foreach(&None::<&str>, |text| received.borrow_mut().push(*text));
    foreach(&Some("second"), |text| received.borrow_mut().push(*text));
    assert_eq!(received.into_inner(), vec!["first", "second"]);
}

#[rstest]
fn effect_terminates_a_pipeline() {
    let mut audit = Vec::new();
    let balance = Some(1_250_u64);
    let formatted = fmap(&balance, |cents| format!("{}.{:02}", cents / 100, cents % 100));
    formatted.foreach(|text| audit.push(format!("balance={text}")));
    assert_eq!(audit, vec!["balance=12.50".to_string()]);
}

#[test]
#[should_panic(expected = "effect failed")]
fn effect_panic_propagates() {
    foreach(&Some(()), |_| panic!("effect failed"));
}

#[test]
fn effect_panic_is_not_raised_for_empty_input() {
    foreach(&None::<()>, |_| panic!("effect must not run"));
}
