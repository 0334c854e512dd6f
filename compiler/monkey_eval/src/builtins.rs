//! Built-in functions.
//!
//! The table is fixed. Each builtin checks its own arity and argument types
//! and reports violations as error objects.

use std::fmt;

use crate::errors::{argument_must_be_array, argument_not_supported, builtin_argument_count};
use crate::{Object, PrintHandlerImpl};

/// A native function reachable by name from every environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Len,
    Puts,
    First,
    Last,
    Rest,
    Push,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::Puts,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
    ];

    /// Find the builtin bound to `name`.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::Puts => "puts",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
        }
    }

    /// Apply to evaluated arguments. `puts` writes through `printer`.
    pub fn call(self, args: &[Object], printer: &PrintHandlerImpl) -> Object {
        match self {
            Builtin::Len => len(args),
            Builtin::Puts => {
                for arg in args {
                    printer.println(&arg.to_string());
                }
                Object::NULL
            }
            Builtin::First => with_array(self, args, |elements| {
                elements.first().cloned().unwrap_or(Object::NULL)
            }),
            Builtin::Last => with_array(self, args, |elements| {
                elements.last().cloned().unwrap_or(Object::NULL)
            }),
            Builtin::Rest => with_array(self, args, |elements| match elements.split_first() {
                Some((_, rest)) => Object::array(rest.to_vec()),
                None => Object::NULL,
            }),
            Builtin::Push => push(args),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn len(args: &[Object]) -> Object {
    let [arg] = args else {
        return builtin_argument_count(args.len(), 1);
    };
    let count = match arg {
        // Byte length.
        Object::Str(value) => value.len(),
        Object::Array(elements) => elements.len(),
        other => return argument_not_supported(Builtin::Len.name(), other.kind()),
    };
    Object::Integer(i64::try_from(count).unwrap_or(i64::MAX))
}

/// Run `f` on the single array argument of `builtin`.
fn with_array(builtin: Builtin, args: &[Object], f: impl FnOnce(&[Object]) -> Object) -> Object {
    match args {
        [Object::Array(elements)] => f(elements.as_slice()),
        [other] => argument_must_be_array(builtin.name(), other.kind()),
        _ => builtin_argument_count(args.len(), 1),
    }
}

/// Returns a new array; the argument is left unchanged.
fn push(args: &[Object]) -> Object {
    match args {
        [Object::Array(elements), value] => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(value.clone());
            Object::array(extended)
        }
        [other, _] => argument_must_be_array(Builtin::Push.name(), other.kind()),
        _ => builtin_argument_count(args.len(), 2),
    }
}

#[cfg(test)]
mod tests;
