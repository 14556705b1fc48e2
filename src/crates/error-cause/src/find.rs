//! Reference search over a cause chain

use crate::chained::{ErrorLike, ErrorRef};
use crate::value::Value;
use crate::walk::{walk, Link};
use std::any::{type_name, Any, TypeId};

/// Runtime descriptor of a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMarker {
    id: TypeId,
    name: &'static str,
    error_capable: bool,
}

impl TypeMarker {
    /// Marker for an error-like type.
    pub fn of<T: ErrorLike>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            error_capable: true,
        }
    }

    /// Marker for an arbitrary type whose instances are not error-like.
    /// Searching with it never matches anything.
    pub fn foreign<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            error_capable: false,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_error_capable(&self) -> bool {
        self.error_capable
    }
}

/// What to look for in a cause chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// The generic error marker: every error-like node matches.
    Error,
    /// Nodes that are instances of the marked type.
    Type(TypeMarker),
}

impl Reference {
    /// Shorthand for `Reference::Type(TypeMarker::of::<T>())`.
    pub fn of<T: ErrorLike>() -> Self {
        Reference::Type(TypeMarker::of::<T>())
    }

    /// Whether the reference can describe error-like nodes at all.
    pub fn is_error_capable(&self) -> bool {
        match self {
            Reference::Error => true,
            Reference::Type(marker) => marker.is_error_capable(),
        }
    }

    pub fn matches(&self, error: &dyn ErrorLike) -> bool {
        match self {
            Reference::Error => true,
            Reference::Type(marker) => marker.is_error_capable() && error.is_instance_of(marker),
        }
    }
}

impl From<TypeMarker> for Reference {
    fn from(marker: TypeMarker) -> Self {
        Reference::Type(marker)
    }
}

/// Find the first node in the chain of `err`, `err` itself included, that
/// matches `reference`.
///
/// Returns `None` when `err` is not error-like, when `reference` cannot
/// describe error-like values, or when the chain ends or turns circular
/// before a match.
///
/// # Example
///
/// ```rust
/// use error_cause::{find_cause_by_reference, ErrorWithCause, Reference, Value};
/// use std::sync::Arc;
///
/// let cause = Arc::new(ErrorWithCause::new("Foo"));
/// let err = Arc::new(ErrorWithCause::with_cause("Bar", &cause));
///
/// let found = find_cause_by_reference(&err, &Reference::of::<ErrorWithCause>()).unwrap();
/// assert!(Value::Error(found).is_same_error(&err));
/// ```
pub fn find_cause_by_reference(err: impl Into<Value>, reference: &Reference) -> Option<ErrorRef> {
    if !reference.is_error_capable() {
        return None;
    }

    walk(err).find_map(|link| match link {
        Link::Node { error, .. } if reference.matches(error.as_ref()) => Some(error),
        _ => None,
    })
}

/// Find the first node in the chain of `err` that is an instance of `T`.
pub fn find_cause<T: ErrorLike>(err: impl Into<Value>) -> Option<ErrorRef> {
    find_cause_by_reference(err, &Reference::of::<T>())
}
