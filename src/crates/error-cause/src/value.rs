//! Dynamic value model for causes and traversal inputs

use crate::chained::{ErrorLike, ErrorRef};
use crate::stringify::{stringify_value, Stringify};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a non-error value that can be rendered.
pub type ObjectRef = Arc<dyn Stringify>;

/// Any value that can appear as an input to the traversal functions or as a
/// cause.
///
/// `Error` and `Object` hold shared references and are compared by identity
/// in [`Value::same`]; the remaining variants compare by value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent-value marker.
    #[default]
    Undefined,
    /// The explicit null marker.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// An error-like node.
    Error(ErrorRef),
    /// An arbitrary non-error value, rendered through serialization.
    Object(ObjectRef),
}

impl Value {
    /// Wrap an error-like value.
    pub fn error<E: ErrorLike>(error: E) -> Self {
        Value::Error(Arc::new(error))
    }

    /// Wrap an arbitrary serializable non-error value.
    pub fn object<T: Stringify + 'static>(object: T) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Whether the value is error-like and can act as a chain link.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether the value is `Undefined` or `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_error(&self) -> Option<&ErrorRef> {
        match self {
            Value::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<ErrorRef> {
        match self {
            Value::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Identity comparison: shared references must point at the same
    /// allocation, everything else compares by value.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            }
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            }
            _ => false,
        }
    }

    /// Whether this value holds exactly the given error node.
    pub fn is_same_error<E: ErrorLike>(&self, error: &Arc<E>) -> bool {
        match self {
            Value::Error(inner) => {
                std::ptr::eq(Arc::as_ptr(inner) as *const (), Arc::as_ptr(error) as *const ())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Error(error) => f
                .debug_struct("Error")
                .field("name", &error.name())
                .field("message", &error.message())
                .finish(),
            Value::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_value(self))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

impl<T: ErrorLike> From<Arc<T>> for Value {
    fn from(error: Arc<T>) -> Self {
        Value::Error(error)
    }
}

impl<T: ErrorLike> From<&Arc<T>> for Value {
    fn from(error: &Arc<T>) -> Self {
        Value::Error(error.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chained::ErrorWithCause;

    #[test]
    fn test_conversions() {
        assert!(matches!(Value::from("abc"), Value::String(s) if s == "abc"));
        assert!(matches!(Value::from(123), Value::Number(n) if n == 123.0));
        assert!(matches!(Value::from(false), Value::Bool(false)));
        assert!(matches!(Value::from(None::<bool>), Value::Undefined));
        assert!(Value::from(Arc::new(ErrorWithCause::new("Foo"))).is_error());
    }

    #[test]
    fn test_same_uses_identity_for_errors() {
        let a = Arc::new(ErrorWithCause::new("Foo"));
        let b = Arc::new(ErrorWithCause::new("Foo"));

        assert!(Value::from(&a).same(&Value::from(&a)));
        assert!(!Value::from(&a).same(&Value::from(&b)));
        assert!(Value::from(&a).is_same_error(&a));
    }

    #[test]
    fn test_same_compares_primitives_by_value() {
        assert!(Value::from("x").same(&Value::from("x")));
        assert!(Value::Null.same(&Value::Null));
        assert!(!Value::Null.same(&Value::Undefined));
    }

    #[test]
    fn test_nullish() {
        assert!(Value::Undefined.is_nullish());
        assert!(Value::Null.is_nullish());
        assert!(!Value::from(0).is_nullish());
    }
}
