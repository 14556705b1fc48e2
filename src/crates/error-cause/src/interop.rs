//! Bridges from standard error chains
//!
//! `std::error::Error::source` borrows, so a standard chain cannot be shared
//! into a cause chain directly. These helpers take a snapshot instead: one
//! `ErrorWithCause` per link, carrying the link's `Display` text.

use crate::chained::ErrorWithCause;
use crate::config::TraceCapture;
use std::error::Error as StdError;
use std::sync::Arc;

impl ErrorWithCause {
    /// Snapshot a `source()` chain into a cause chain.
    ///
    /// ```rust
    /// use error_cause::{message_with_causes, ErrorWithCause};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let err = ErrorWithCause::from_std(&io);
    /// assert_eq!(message_with_causes(&err), "no such file");
    /// ```
    pub fn from_std(error: &(dyn StdError + 'static)) -> Arc<Self> {
        let mut messages =
            std::iter::successors(Some(error), |&e| e.source()).map(|e| e.to_string());
        let outermost = messages.next().unwrap_or_default();
        snapshot(outermost, messages.collect())
    }

    /// Snapshot an `anyhow` context chain into a cause chain.
    pub fn from_anyhow(error: &anyhow::Error) -> Arc<Self> {
        let mut messages = error.chain().map(|e| e.to_string());
        let outermost = messages.next().unwrap_or_default();
        snapshot(outermost, messages.collect())
    }
}

fn snapshot(outermost: String, causes: Vec<String>) -> Arc<ErrorWithCause> {
    let mut cause: Option<Arc<ErrorWithCause>> = None;
    for message in causes.into_iter().rev() {
        cause = Some(Arc::new(link(message, cause.take())));
    }
    Arc::new(link(outermost, cause))
}

fn link(message: String, cause: Option<Arc<ErrorWithCause>>) -> ErrorWithCause {
    let builder = ErrorWithCause::builder()
        .message(message)
        .trace_capture(TraceCapture::Header);

    match cause {
        Some(cause) => builder.cause(cause).build(),
        None => builder.build(),
    }
}
