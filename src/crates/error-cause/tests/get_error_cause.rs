//! Integration tests for get_error_cause

mod common;

use common::{NonErrorAccessor, SubError, VError};
use error_cause::{get_error_cause, ErrorWithCause, Value};
use std::sync::Arc;

// ------------------------------------------------------------------------
// Resilient API
// ------------------------------------------------------------------------

#[test]
fn test_handles_being_given_nothing() {
    assert!(get_error_cause(Value::Undefined).is_none());
}

#[test]
fn test_returns_nothing_for_non_error() {
    assert!(get_error_cause(true).is_none());
}

#[test]
fn test_returns_nothing_for_null() {
    assert!(get_error_cause(Value::Null).is_none());
}

#[test]
fn test_returns_nothing_for_error_without_cause() {
    let err = Arc::new(ErrorWithCause::new("Foo"));
    assert!(get_error_cause(&err).is_none());
}

// ------------------------------------------------------------------------
// Direct causes
// ------------------------------------------------------------------------

#[test]
fn test_returns_cause() {
    let cause = SubError::new("Foo");
    let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));

    let result = get_error_cause(&err).unwrap();
    assert!(Value::Error(result).is_same_error(&cause));
}

#[test]
fn test_does_not_return_non_error_cause() {
    let err = Arc::new(ErrorWithCause::with_cause("Bar", "123"));
    assert!(get_error_cause(&err).is_none());
}

// ------------------------------------------------------------------------
// Deferred (VError style) causes
// ------------------------------------------------------------------------

#[test]
fn test_returns_deferred_cause() {
    let cause = SubError::new("Foo");
    let err = VError::new(cause.clone(), "Bar");

    let result = get_error_cause(&err).unwrap();
    assert!(Value::Error(result).is_same_error(&cause));
}

#[test]
fn test_does_not_return_deferred_non_error_cause() {
    let err = Arc::new(NonErrorAccessor);
    assert!(get_error_cause(&err).is_none());
}
