//! Best-effort rendering of cause values

use crate::constants::{
    INFINITY_LITERAL, MAX_STRINGIFY_DEPTH, NAN_LITERAL, NEG_INFINITY_LITERAL, NULL_LITERAL,
    STRINGIFY_FALLBACK, UNDEFINED_LITERAL,
};
use crate::error::{CauseError, Result};
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;
use tracing::debug;

/// A non-error value that can be rendered as compact text.
///
/// Every `Serialize` type gets this through [`to_compact_string`]. Implement
/// it by hand for values whose serialization needs special care; returning an
/// error makes the stack composer fall back to a fixed marker.
pub trait Stringify: Send + Sync {
    fn stringify(&self) -> Result<String>;
}

impl<T: Serialize + Send + Sync> Stringify for T {
    fn stringify(&self) -> Result<String> {
        to_compact_string(self)
    }
}

/// Compact JSON with a nesting bound.
///
/// serde_json does not limit recursion while serializing, so a cyclic
/// `Serialize` graph would recurse until the stack runs out. Nesting deeper
/// than `MAX_STRINGIFY_DEPTH` objects/arrays is reported as an error instead.
pub fn to_compact_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, DepthLimited::default());
    value
        .serialize(&mut serializer)
        .map_err(|e| CauseError::StringifyError(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| CauseError::StringifyError(e.to_string()))
}

/// Compact formatter that refuses to open containers past the depth bound.
#[derive(Default)]
struct DepthLimited {
    depth: usize,
}

impl DepthLimited {
    fn enter<W: ?Sized + io::Write>(&mut self, writer: &mut W, open: &[u8]) -> io::Result<()> {
        if self.depth >= MAX_STRINGIFY_DEPTH {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("value nests deeper than {} levels", MAX_STRINGIFY_DEPTH),
            ));
        }
        self.depth += 1;
        writer.write_all(open)
    }

    fn leave<W: ?Sized + io::Write>(&mut self, writer: &mut W, close: &[u8]) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        writer.write_all(close)
    }
}

impl Formatter for DepthLimited {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.enter(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.leave(writer, b"]")
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.enter(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.leave(writer, b"}")
    }
}

/// Render any value as text, never failing.
///
/// Strings are JSON-quoted, numbers use their natural form, objects are
/// compact-serialized and fall back to `<failed to stringify value>`.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Undefined => UNDEFINED_LITERAL.to_string(),
        Value::Null => NULL_LITERAL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => quote_string(s),
        Value::Error(error) => error
            .trace()
            .or_else(|| error.message().map(str::to_string))
            .unwrap_or_default(),
        Value::Object(object) => match object.stringify() {
            Ok(text) => text,
            Err(e) => {
                debug!("Falling back to placeholder for unserializable cause: {}", e);
                STRINGIFY_FALLBACK.to_string()
            }
        },
    }
}

/// Format a number the way it would be printed for a human: integral values
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        NAN_LITERAL.to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            INFINITY_LITERAL.to_string()
        } else {
            NEG_INFINITY_LITERAL.to_string()
        }
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn quote_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| STRINGIFY_FALLBACK.to_string())
}
