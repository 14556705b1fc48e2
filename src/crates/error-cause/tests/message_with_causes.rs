//! Integration tests for message_with_causes

mod common;

use common::VError;
use error_cause::{message_with_causes, ErrorWithCause, Value};
use std::sync::Arc;

// ------------------------------------------------------------------------
// Resilient API
// ------------------------------------------------------------------------

#[test]
fn test_handles_being_given_nothing() {
    assert_eq!(message_with_causes(Value::Undefined), "");
}

#[test]
fn test_handles_being_given_null() {
    assert_eq!(message_with_causes(Value::Null), "");
}

#[test]
fn test_handles_non_error_values() {
    assert_eq!(message_with_causes("Foo"), "");
    assert_eq!(message_with_causes(42), "");
}

#[test]
fn test_handles_an_absent_message() {
    let err = Arc::new(ErrorWithCause::builder().build());
    assert_eq!(message_with_causes(&err), "");
}

// ------------------------------------------------------------------------
// Composition
// ------------------------------------------------------------------------

#[test]
fn test_returns_the_message() {
    let err = Arc::new(ErrorWithCause::new("Foo"));
    assert_eq!(message_with_causes(&err), "Foo");
}

#[test]
fn test_appends_causes_to_the_message() {
    let cause = Arc::new(ErrorWithCause::new("Foo"));
    let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
    assert_eq!(message_with_causes(&err), "Bar: Foo");
}

#[test]
fn test_appends_a_multi_level_chain() {
    let foo = Arc::new(ErrorWithCause::new("Foo"));
    let abc = Arc::new(ErrorWithCause::with_cause("Abc", &foo));
    let bar = Arc::new(ErrorWithCause::with_cause("Bar", &abc));
    let xyz = Arc::new(ErrorWithCause::with_cause("Xyz", &bar));

    assert_eq!(message_with_causes(&xyz), "Xyz: Bar: Abc: Foo");
}

#[test]
fn test_appends_deferred_causes_without_repeating_them() {
    let cause1 = Arc::new(ErrorWithCause::new("Foo"));
    let cause2 = Arc::new(ErrorWithCause::with_cause("Abc", &cause1));
    let cause3 = VError::new(cause2, "Bar");
    let err = Arc::new(ErrorWithCause::with_cause("Xyz", &cause3));

    assert_eq!(message_with_causes(&err), "Xyz: Bar: Abc: Foo");
}

#[test]
fn test_stops_at_non_error_cause() {
    let cause = Arc::new(ErrorWithCause::with_cause("Foo", "string cause"));
    let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
    assert_eq!(message_with_causes(&err), "Bar: Foo");
}

#[test]
fn test_does_not_go_infinite_on_circular_causes() {
    let cause = Arc::new(ErrorWithCause::new("Foo"));
    let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
    cause.set_cause(&err);

    assert_eq!(message_with_causes(&err), "Bar: Foo: Bar: ...");

    cause.clear_cause();
}
