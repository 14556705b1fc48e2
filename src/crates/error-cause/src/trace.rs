//! Diagnostic trace capture

use crate::config::TraceCapture;
use crate::constants::TRACE_HEADER_SEPARATOR;
use std::backtrace::{Backtrace, BacktraceStatus};

/// Build the trace text for a freshly constructed error.
///
/// The first line is `"<name>: <message>"`, or just `<name>` when the
/// message is absent or empty. A backtrace follows on the next lines when
/// `mode` asked for one and the platform produced it.
pub fn capture(name: &str, message: Option<&str>, mode: TraceCapture) -> String {
    let header = header(name, message);

    let backtrace = match mode {
        TraceCapture::Header => return header,
        TraceCapture::Auto => Backtrace::capture(),
        TraceCapture::Force => Backtrace::force_capture(),
    };

    match backtrace.status() {
        BacktraceStatus::Captured => format!("{}\n{}", header, backtrace),
        _ => header,
    }
}

/// First line of a trace.
pub fn header(name: &str, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => {
            format!("{}{}{}", name, TRACE_HEADER_SEPARATOR, message)
        }
        _ => name.to_string(),
    }
}
