//! Runtime values.

use std::fmt;

use crate::keyword;

/// A Lark value.
///
/// `Int`, `Str` and `Bool` are concrete and resolve to themselves. `VarRef`
/// names a binding on the scope stack and only becomes concrete once the
/// evaluator resolves it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    VarRef(String),
}

impl Value {
    /// Build an unresolved reference to `name`.
    pub fn var(name: impl Into<String>) -> Self {
        Value::VarRef(name.into())
    }

    /// Build a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Whether both values are the same variant.
    #[inline]
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Renders the value the way `print` shows it: integers in decimal, strings
/// verbatim, booleans as `true`/`false`. A `VarRef` renders as its name; the
/// evaluator resolves references before printing them.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str(keyword::TRUE),
            Value::Bool(false) => f.write_str(keyword::FALSE),
            Value::VarRef(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
