//! Message composition

use crate::chained::ErrorLike;
use crate::constants::{MESSAGE_CIRCULAR_MARKER, MESSAGE_SEPARATOR};
use crate::value::Value;
use crate::walk::{walk, Link};

/// Join the messages of `err` and its error-like causes with `": "`.
///
/// Non-error inputs give an empty string and absent messages render as
/// empty text. Non-error causes end the composition without contributing.
/// A circular chain repeats the first revisited message and ends in `...`.
///
/// Nodes reached through a deferred cause accessor follow the VError
/// convention of already embedding their cause's message in their own, so
/// their segment and the separator before it are left out.
///
/// # Example
///
/// ```rust
/// use error_cause::{message_with_causes, ErrorWithCause};
/// use std::sync::Arc;
///
/// let cause = Arc::new(ErrorWithCause::new("Foo"));
/// let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
/// assert_eq!(message_with_causes(&err), "Bar: Foo");
/// ```
pub fn message_with_causes(err: impl Into<Value>) -> String {
    let mut output = String::new();
    let mut first = true;

    for link in walk(err) {
        match link {
            Link::Node { error, deferred } => {
                push_segment(&mut output, error.as_ref(), deferred, first);
                first = false;
            }
            Link::Cycle { error, deferred } => {
                push_segment(&mut output, error.as_ref(), deferred, first);
                output.push_str(MESSAGE_SEPARATOR);
                output.push_str(MESSAGE_CIRCULAR_MARKER);
            }
            Link::Terminal(_) => {}
        }
    }

    output
}

fn push_segment(output: &mut String, error: &dyn ErrorLike, deferred: bool, first: bool) {
    // The parent's message already covers a deferred cause.
    if deferred {
        return;
    }
    if !first {
        output.push_str(MESSAGE_SEPARATOR);
    }
    output.push_str(error.message().unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chained::ErrorWithCause;
    use std::sync::Arc;

    #[test]
    fn test_single_message() {
        let err = Arc::new(ErrorWithCause::new("Foo"));
        assert_eq!(message_with_causes(&err), "Foo");
    }

    #[test]
    fn test_non_error_cause_is_not_appended() {
        let err = Arc::new(ErrorWithCause::with_cause("Foo", "string cause"));
        assert_eq!(message_with_causes(&err), "Foo");
    }

    #[test]
    fn test_empty_message_keeps_chain() {
        let cause = Arc::new(ErrorWithCause::new("Foo"));
        let err = Arc::new(ErrorWithCause::builder().cause(&cause).build());
        assert_eq!(message_with_causes(&err), ": Foo");
    }

    #[test]
    fn test_self_reference() {
        let err = Arc::new(ErrorWithCause::new("Foo"));
        err.set_cause(&err);
        assert_eq!(message_with_causes(&err), "Foo: Foo: ...");
        err.clear_cause();
    }
}
