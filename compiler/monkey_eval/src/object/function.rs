//! User-defined function objects.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};

use crate::Environment;

/// A function literal paired with the environment it was evaluated in.
///
/// The literal is shared with the AST, not copied. Equality is by literal
/// and captured scope: every lookup of a recursive binding rebuilds the
/// object, and those copies are the same function.
pub struct FunctionObject {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionObject {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionObject { literal, env }
    }

    pub fn literal(&self) -> &Rc<FunctionLiteral> {
        &self.literal
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }

    /// The environment captured at definition.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Same literal closed over the same scope.
    pub fn same_closure(&self, other: &FunctionObject) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Display for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

// Hand-written: the captured environment may contain this function.
impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("literal", &self.literal.to_string())
            .finish_non_exhaustive()
    }
}
