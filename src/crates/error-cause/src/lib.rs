//! error-cause - cause-chain utilities for chained errors
//!
//! An error may carry a cause, which may carry its own cause, and so on. This
//! crate walks such chains: extracting causes, searching for a node of a given
//! type, and composing messages and stack traces across the whole chain.
//! Chains are consulted by identity and may be circular; every traversal
//! terminates and none of them panic on unexpected input.
//!
//! # Example
//!
//! ```rust
//! use error_cause::{message_with_causes, stack_with_causes, ErrorWithCause};
//! use std::sync::Arc;
//!
//! let cause = Arc::new(ErrorWithCause::new("connection reset"));
//! let err = Arc::new(ErrorWithCause::with_cause("request failed", &cause));
//!
//! assert_eq!(message_with_causes(&err), "request failed: connection reset");
//!
//! let stack = stack_with_causes(&err);
//! assert!(stack.starts_with("ErrorWithCause: request failed"));
//! assert!(stack.contains("\ncaused by: ErrorWithCause: connection reset"));
//! ```
//!
//! # Modules
//!
//! - `chained` - the [`ErrorLike`] capability and [`ErrorWithCause`]
//! - `extract` - cause representations and [`get_error_cause`]
//! - `walk` - the cycle-safe [`ChainWalker`]
//! - `find` - [`find_cause_by_reference`] and type markers
//! - `compose` - [`message_with_causes`] and [`stack_with_causes`]
//! - `config` - trace capture configuration

pub mod chained;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod find;
pub mod interop;
pub mod stringify;
pub mod trace;
pub mod value;
pub mod walk;

pub use chained::{ErrorLike, ErrorRef, ErrorWithCause, ErrorWithCauseBuilder};
pub use compose::{message_with_causes, stack_with_causes};
pub use config::{CauseConfig, TraceCapture};
pub use error::{CauseError, Result};
pub use extract::{get_error_cause, resolve_cause, CauseFn, CauseRepr, ResolvedCause};
pub use find::{find_cause, find_cause_by_reference, Reference, TypeMarker};
pub use stringify::{stringify_value, Stringify};
pub use value::{ObjectRef, Value};
pub use walk::{walk, ChainWalker, Link};
