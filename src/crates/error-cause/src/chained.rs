//! The error-like capability and the `ErrorWithCause` carrier.

use crate::config::{self, TraceCapture};
use crate::extract::CauseRepr;
use crate::find::TypeMarker;
use crate::trace;
use crate::value::Value;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an error-like chain node.
///
/// Nodes are compared by identity (the address of the shared allocation),
/// never by value.
pub type ErrorRef = Arc<dyn ErrorLike>;

/// Minimal capability set for a value to take part in chain traversal.
pub trait ErrorLike: Any + Send + Sync {
    /// Type name used in trace headers, e.g. `ErrorWithCause`.
    fn name(&self) -> &str;

    /// Readable message, if any.
    fn message(&self) -> Option<&str>;

    /// Diagnostic trace text, if any.
    fn trace(&self) -> Option<String> {
        None
    }

    /// The cause attribute. `None` means the node has no cause attribute at
    /// all, which differs from a cause explicitly set to `Value::Undefined`.
    fn cause(&self) -> Option<CauseRepr> {
        None
    }

    /// Whether this node counts as an instance of the marked type.
    ///
    /// Defaults to exact type identity; override to also answer for the
    /// "parent" types a node wants to be found as.
    fn is_instance_of(&self, marker: &TypeMarker) -> bool {
        marker.id() == self.as_any().type_id()
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn ErrorLike {
    /// Returns true if the node's concrete type is `T`.
    pub fn is<T: ErrorLike>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: ErrorLike>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Identity of a chain node, used by the walker's visited set.
pub(crate) fn node_id(error: &ErrorRef) -> usize {
    Arc::as_ptr(error) as *const () as usize
}

/// An error carrying an optional cause.
///
/// `message` is fixed at construction. `cause` and `trace` sit behind locks
/// so a shared node can be re-pointed after construction; this is how cyclic
/// chains come to exist, and every traversal in this crate tolerates them.
///
/// The cause attribute exists only when it was explicitly supplied:
/// [`ErrorWithCause::new`] leaves it absent, while
/// [`ErrorWithCause::with_cause`] sets it even to `Value::Undefined`.
pub struct ErrorWithCause {
    message: Option<String>,
    cause: RwLock<Option<CauseRepr>>,
    trace: RwLock<Option<String>>,
}

impl ErrorWithCause {
    pub const NAME: &'static str = "ErrorWithCause";

    /// Create an error with a message and no cause attribute.
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder().message(message).build()
    }

    /// Create an error with a message and an explicit cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Value>) -> Self {
        Self::builder().message(message).cause(cause).build()
    }

    pub fn builder() -> ErrorWithCauseBuilder {
        ErrorWithCauseBuilder::new()
    }

    /// The cause exactly as supplied, or `Value::Undefined` when absent.
    ///
    /// Deferred causes are resolved by invoking their accessor. The lock is
    /// released first, so the accessor may read or replace this cause.
    pub fn cause_value(&self) -> Value {
        let repr = self.cause.read().clone();
        repr.as_ref().map(CauseRepr::resolve).unwrap_or_default()
    }

    /// Whether the cause attribute was supplied.
    pub fn has_cause(&self) -> bool {
        self.cause.read().is_some()
    }

    /// Replace the cause. May create a cycle; traversals stay finite.
    pub fn set_cause(&self, cause: impl Into<Value>) {
        *self.cause.write() = Some(CauseRepr::Direct(cause.into()));
    }

    /// Replace the cause with a legacy deferred accessor.
    pub fn set_deferred_cause<F>(&self, accessor: F)
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        *self.cause.write() = Some(CauseRepr::deferred(accessor));
    }

    /// Remove the cause attribute entirely, returning the previous one.
    ///
    /// Cyclic chains keep each other alive until one link is cleared.
    pub fn clear_cause(&self) -> Option<CauseRepr> {
        self.cause.write().take()
    }

    pub fn set_trace(&self, trace: impl Into<String>) {
        *self.trace.write() = Some(trace.into());
    }

    pub fn clear_trace(&self) {
        *self.trace.write() = None;
    }

    /// Move the error into a shared chain node.
    pub fn into_ref(self) -> ErrorRef {
        Arc::new(self)
    }
}

impl ErrorLike for ErrorWithCause {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn trace(&self) -> Option<String> {
        self.trace.read().clone()
    }

    fn cause(&self) -> Option<CauseRepr> {
        self.cause.read().clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for ErrorWithCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorWithCause")
            .field("message", &self.message)
            .field("has_cause", &self.has_cause())
            .finish()
    }
}

impl fmt::Display for ErrorWithCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or_default())
    }
}

/// `source()` stays `None`. The cause lives behind a lock and may be a
/// non-error value or a deferred accessor, so it cannot be lent out as a
/// `&dyn Error`. Read the chain with [`crate::walk`],
/// [`crate::message_with_causes`] or [`crate::stack_with_causes`].
impl std::error::Error for ErrorWithCause {}

/// Builder for [`ErrorWithCause`].
///
/// ```rust
/// use error_cause::{ErrorWithCause, TraceCapture};
///
/// let err = ErrorWithCause::builder()
///     .message("Failed to load profile")
///     .cause("connection reset")
///     .trace_capture(TraceCapture::Header)
///     .build();
/// assert_eq!(err.to_string(), "Failed to load profile");
/// ```
#[derive(Default)]
pub struct ErrorWithCauseBuilder {
    message: Option<String>,
    cause: Option<CauseRepr>,
    trace_capture: Option<TraceCapture>,
}

impl ErrorWithCauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the cause attribute, including falsy values such as
    /// `Value::Undefined` or `false`.
    pub fn cause(mut self, cause: impl Into<Value>) -> Self {
        self.cause = Some(CauseRepr::Direct(cause.into()));
        self
    }

    /// Set a cause that is produced on demand by a zero-argument accessor.
    pub fn deferred_cause<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.cause = Some(CauseRepr::deferred(accessor));
        self
    }

    /// Override the globally configured trace capture mode for this error.
    pub fn trace_capture(mut self, mode: TraceCapture) -> Self {
        self.trace_capture = Some(mode);
        self
    }

    pub fn build(self) -> ErrorWithCause {
        let mode = self
            .trace_capture
            .unwrap_or_else(|| config::global().trace_capture);
        let trace = trace::capture(ErrorWithCause::NAME, self.message.as_deref(), mode);

        ErrorWithCause {
            message: self.message,
            cause: RwLock::new(self.cause),
            trace: RwLock::new(Some(trace)),
        }
    }
}
