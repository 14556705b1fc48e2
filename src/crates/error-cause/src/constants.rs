//! Literal markers emitted by the composers

// Message composition
pub const MESSAGE_SEPARATOR: &str = ": ";
pub const MESSAGE_CIRCULAR_MARKER: &str = "...";

// Stack composition
pub const CAUSED_BY_PREFIX: &str = "\ncaused by: ";
pub const STACK_CIRCULAR_MARKER: &str = "\ncauses have become circular...";

// Value rendering
pub const STRINGIFY_FALLBACK: &str = "<failed to stringify value>";
pub const UNDEFINED_LITERAL: &str = "undefined";
pub const NULL_LITERAL: &str = "null";
pub const NAN_LITERAL: &str = "NaN";
pub const INFINITY_LITERAL: &str = "Infinity";
pub const NEG_INFINITY_LITERAL: &str = "-Infinity";

/// Deepest object/array nesting rendered for a non-error cause.
pub const MAX_STRINGIFY_DEPTH: usize = 128;

/// Separator between a trace header's type name and message.
pub const TRACE_HEADER_SEPARATOR: &str = ": ";

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "ERROR_CAUSE";
