//! Runtime objects.
//!
//! `Object` is cheap to clone: heap-backed variants share their payload
//! through `Rc`. Booleans and null are plain values, so identity comparison
//! on them is value comparison.

mod function;
mod hash;

use std::fmt;
use std::rc::Rc;

pub use function::FunctionObject;
pub use hash::{HashKey, HashObject, HashPair};

use crate::Builtin;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Str(Rc<str>),
    Boolean(bool),
    Null,
    /// Marks a value produced by `return`. Consumed at the nearest function
    /// call or program boundary.
    ReturnValue(Rc<Object>),
    /// Runtime error message.
    Error(Rc<str>),
    Function(Rc<FunctionObject>),
    Builtin(Builtin),
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashObject>),
}

/// Type tag of an object, rendered in the form used by error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Integer,
    String,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
    Builtin,
    Array,
    Hash,
}

impl ObjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::String => "STRING",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::Null => "NULL",
            ObjectKind::ReturnValue => "RETURN_VALUE",
            ObjectKind::Error => "ERROR",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Builtin => "BUILTIN_FUNCTION",
            ObjectKind::Array => "ARRAY",
            ObjectKind::Hash => "HASH",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);
    pub const NULL: Object = Object::Null;

    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::Str(value.into())
    }

    pub fn error(message: impl Into<Rc<str>>) -> Self {
        Object::Error(message.into())
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    pub fn hash(hash: HashObject) -> Self {
        Object::Hash(Rc::new(hash))
    }

    pub fn return_value(value: Object) -> Self {
        Object::ReturnValue(Rc::new(value))
    }

    /// Boolean object for `value`.
    #[inline]
    pub const fn boolean(value: bool) -> Self {
        Object::Boolean(value)
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Str(_) => ObjectKind::String,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Null => ObjectKind::Null,
            Object::ReturnValue(_) => ObjectKind::ReturnValue,
            Object::Error(_) => ObjectKind::Error,
            Object::Function(_) => ObjectKind::Function,
            Object::Builtin(_) => ObjectKind::Builtin,
            Object::Array(_) => ObjectKind::Array,
            Object::Hash(_) => ObjectKind::Hash,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Only `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    /// Identity comparison used by `==` and `!=` outside the integer and
    /// string cases.
    ///
    /// Booleans and null compare by value; heap objects only equal
    /// themselves, and a function equals its rebuilt copies.
    pub fn is_identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            (Object::Str(a), Object::Str(b)) | (Object::Error(a), Object::Error(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Object::ReturnValue(a), Object::ReturnValue(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => a.same_closure(b),
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Hash key for integers, strings, and booleans; `None` otherwise.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey::integer(*value)),
            Object::Boolean(value) => Some(HashKey::boolean(*value)),
            Object::Str(value) => Some(HashKey::string(value)),
            _ => None,
        }
    }
}

/// Structural equality. Functions compare by literal and captured scope.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Str(a), Object::Str(b)) | (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => a.same_closure(b),
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            _ => false,
        }
    }
}

/// The inspect rendering shown to users.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Str(value) => f.write_str(value),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
            Object::Function(func) => write!(f, "{func}"),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::boolean(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}
