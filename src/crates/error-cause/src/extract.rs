//! Cause extraction
//!
//! A node exposes its cause either directly or through a zero-argument
//! accessor (the VError convention). Both are normalized here so the walker
//! never needs to know which one it is looking at.

use crate::chained::{ErrorLike, ErrorRef};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Zero-argument cause accessor.
pub type CauseFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// How a node stores its cause.
#[derive(Clone)]
pub enum CauseRepr {
    /// The cause value itself.
    Direct(Value),
    /// An accessor producing the cause when invoked.
    Deferred(CauseFn),
}

impl CauseRepr {
    pub fn deferred<F>(accessor: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        CauseRepr::Deferred(Arc::new(accessor))
    }

    /// Produce the cause value, invoking the accessor if there is one.
    pub fn resolve(&self) -> Value {
        match self {
            CauseRepr::Direct(value) => value.clone(),
            CauseRepr::Deferred(accessor) => accessor(),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, CauseRepr::Deferred(_))
    }
}

impl fmt::Debug for CauseRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CauseRepr::Direct(value) => f.debug_tuple("Direct").field(value).finish(),
            CauseRepr::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A node's cause after normalization.
#[derive(Debug, Clone)]
pub struct ResolvedCause {
    pub value: Value,
    /// True when the value came from a deferred accessor.
    pub deferred: bool,
}

/// Resolve the cause attribute of a node, whatever its shape.
///
/// Returns `None` only when the node has no cause attribute.
pub fn resolve_cause(error: &dyn ErrorLike) -> Option<ResolvedCause> {
    let repr = error.cause()?;
    Some(ResolvedCause {
        value: repr.resolve(),
        deferred: repr.is_deferred(),
    })
}

/// Get the immediate cause of `err` if that cause is itself error-like.
///
/// Any input is accepted: non-error inputs and non-error causes give `None`.
///
/// # Example
///
/// ```rust
/// use error_cause::{get_error_cause, ErrorWithCause};
/// use std::sync::Arc;
///
/// let cause = Arc::new(ErrorWithCause::new("Foo"));
/// let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
///
/// let found = get_error_cause(&err).unwrap();
/// assert_eq!(found.message(), Some("Foo"));
/// assert!(get_error_cause(&cause).is_none());
/// ```
pub fn get_error_cause(err: impl Into<Value>) -> Option<ErrorRef> {
    let error = err.into().into_error()?;
    resolve_cause(error.as_ref())?.value.into_error()
}
