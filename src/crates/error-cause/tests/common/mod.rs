//! Shared fixtures for integration tests

#![allow(dead_code)]

use error_cause::{CauseRepr, ErrorLike, ErrorRef, TraceCapture, TypeMarker, Value};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;

/// Error type that other fixtures declare as their parent.
pub struct BaseError {
    message: String,
}

impl BaseError {
    pub fn new(message: &str) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
        })
    }
}

impl ErrorLike for BaseError {
    fn name(&self) -> &str {
        "BaseError"
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn trace(&self) -> Option<String> {
        Some(format!("BaseError: {}", self.message))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Error type that is also found when searching for [`BaseError`].
pub struct SubError {
    message: String,
    cause: RwLock<Option<CauseRepr>>,
}

impl SubError {
    pub fn new(message: &str) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
            cause: RwLock::new(None),
        })
    }

    pub fn with_cause(message: &str, cause: impl Into<Value>) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
            cause: RwLock::new(Some(CauseRepr::Direct(cause.into()))),
        })
    }

    pub fn set_cause(&self, cause: impl Into<Value>) {
        *self.cause.write() = Some(CauseRepr::Direct(cause.into()));
    }

    pub fn clear_cause(&self) {
        *self.cause.write() = None;
    }
}

impl ErrorLike for SubError {
    fn name(&self) -> &str {
        "SubError"
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn trace(&self) -> Option<String> {
        Some(format!("SubError: {}", self.message))
    }

    fn cause(&self) -> Option<CauseRepr> {
        self.cause.read().clone()
    }

    fn is_instance_of(&self, marker: &TypeMarker) -> bool {
        *marker == TypeMarker::of::<SubError>() || *marker == TypeMarker::of::<BaseError>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Legacy-style error: exposes its cause through an accessor and embeds the
/// cause's message in its own.
pub struct VError {
    message: String,
    cause: ErrorRef,
}

impl VError {
    pub fn new(cause: ErrorRef, message: &str) -> Arc<Self> {
        let message = match cause.message() {
            Some(inner) if !inner.is_empty() => format!("{}: {}", message, inner),
            _ => message.to_string(),
        };
        Arc::new(Self { message, cause })
    }
}

impl ErrorLike for VError {
    fn name(&self) -> &str {
        "VError"
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn trace(&self) -> Option<String> {
        Some(format!("VError: {}\n    at fixture", self.message))
    }

    fn cause(&self) -> Option<CauseRepr> {
        let cause = self.cause.clone();
        Some(CauseRepr::deferred(move || Value::Error(cause.clone())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Plain object with no cause whose accessor yields a non-error.
pub struct NonErrorAccessor;

impl ErrorLike for NonErrorAccessor {
    fn name(&self) -> &str {
        "NonErrorAccessor"
    }

    fn message(&self) -> Option<&str> {
        None
    }

    fn cause(&self) -> Option<CauseRepr> {
        Some(CauseRepr::deferred(|| Value::from("123")))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Build an `ErrorWithCause` whose trace is only the header line.
pub fn header_only(message: &str) -> error_cause::ErrorWithCause {
    error_cause::ErrorWithCause::builder()
        .message(message)
        .trace_capture(TraceCapture::Header)
        .build()
}
