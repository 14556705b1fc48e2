//! Stack composition

use crate::chained::ErrorLike;
use crate::constants::{CAUSED_BY_PREFIX, STACK_CIRCULAR_MARKER};
use crate::stringify::stringify_value;
use crate::value::Value;
use crate::walk::{walk, Link};

/// Join the diagnostic traces of `err` and its causes, each cause introduced
/// by `"\ncaused by: "`.
///
/// - Non-error inputs give an empty string; absent traces render as empty
///   text.
/// - A present non-error cause ends the output with its rendering: quoted
///   strings, plain numbers and booleans, `null`/`undefined`, compact
///   serialized objects, or `<failed to stringify value>`.
/// - A circular chain repeats the first revisited trace once and ends with
///   `"\ncauses have become circular..."`.
///
/// # Example
///
/// ```rust
/// use error_cause::{stack_with_causes, ErrorWithCause};
/// use std::sync::Arc;
///
/// let cause = Arc::new(ErrorWithCause::new("Foo"));
/// cause.set_trace("abc123");
/// let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
/// err.set_trace("xyz789");
///
/// assert_eq!(stack_with_causes(&err), "xyz789\ncaused by: abc123");
/// ```
pub fn stack_with_causes(err: impl Into<Value>) -> String {
    let mut output = String::new();
    let mut first = true;

    for link in walk(err) {
        if !first {
            output.push_str(CAUSED_BY_PREFIX);
        }
        first = false;

        match link {
            Link::Node { error, .. } => push_trace(&mut output, error.as_ref()),
            Link::Cycle { error, .. } => {
                push_trace(&mut output, error.as_ref());
                output.push_str(STACK_CIRCULAR_MARKER);
            }
            Link::Terminal(value) => output.push_str(&stringify_value(&value)),
        }
    }

    output
}

fn push_trace(output: &mut String, error: &dyn ErrorLike) {
    if let Some(trace) = error.trace() {
        output.push_str(&trace);
    }
}
