//! Cycle-safe chain walker
//!
//! Every traversal in the crate is built on [`ChainWalker`]. It keeps a
//! per-call set of visited node identities and advances with an explicit
//! loop, so neither cycles nor very long chains can exhaust the stack.

use crate::chained::{node_id, ErrorRef};
use crate::extract::{resolve_cause, ResolvedCause};
use crate::value::Value;
use std::collections::HashSet;
use tracing::{debug, trace};

/// One step of a chain traversal.
#[derive(Clone)]
pub enum Link {
    /// A node visited for the first time.
    Node { error: ErrorRef, deferred: bool },
    /// The next cause is a node that was already visited. Always the last
    /// link of a walk.
    Cycle { error: ErrorRef, deferred: bool },
    /// The chain ended on a cause that is present but not error-like.
    Terminal(Value),
}

enum Pending {
    Node { error: ErrorRef, deferred: bool },
    Terminal(Value),
}

/// Iterator over the links of a cause chain.
///
/// Yields nothing for a non-error start value. Each node is yielded as
/// [`Link::Node`] at most once.
pub struct ChainWalker {
    pending: Option<Pending>,
    seen: HashSet<usize>,
}

impl ChainWalker {
    pub fn new(start: impl Into<Value>) -> Self {
        let pending = start.into().into_error().map(|error| Pending::Node {
            error,
            deferred: false,
        });

        Self {
            pending,
            seen: HashSet::new(),
        }
    }

    /// Number of distinct nodes visited so far.
    pub fn visited(&self) -> usize {
        self.seen.len()
    }
}

impl Iterator for ChainWalker {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        let (error, deferred) = match self.pending.take()? {
            Pending::Node { error, deferred } => (error, deferred),
            Pending::Terminal(value) => return Some(Link::Terminal(value)),
        };

        if !self.seen.insert(node_id(&error)) {
            debug!(
                "Cause chain became circular after {} nodes at '{}'",
                self.seen.len(),
                error.name()
            );
            return Some(Link::Cycle { error, deferred });
        }

        self.pending = match resolve_cause(error.as_ref()) {
            Some(ResolvedCause {
                value: Value::Error(next),
                deferred,
            }) => Some(Pending::Node {
                error: next,
                deferred,
            }),
            Some(ResolvedCause { value, .. }) => Some(Pending::Terminal(value)),
            None => None,
        };

        trace!("Visited cause chain node {} ('{}')", self.seen.len(), error.name());
        Some(Link::Node { error, deferred })
    }
}

/// Walk the cause chain starting at `start`, `start` itself included.
pub fn walk(start: impl Into<Value>) -> ChainWalker {
    ChainWalker::new(start)
}
