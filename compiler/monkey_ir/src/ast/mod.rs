//! Tree-shaped AST for Monkey programs.
//!
//! Each node exclusively owns its children, except function literals which
//! sit behind an `Rc` so runtime function objects can share their body.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes and their canonical rendering
//! - `operators`: prefix and infix operators
//! - `stmt`: statements, blocks, and `Program`

mod expr;
mod operators;
mod stmt;

pub use expr::{
    CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression,
};
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{BlockStatement, LetStatement, Program, ReturnStatement, Statement};

/// A borrowed reference to any evaluable node.
///
/// Lets a single dispatch function accept every node kind reachable from a
/// `Program`.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Statement(stmt) => write!(f, "{stmt}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Expression(expr) => write!(f, "{expr}"),
        }
    }
}
