//! Statement nodes, blocks, and the program root.

use std::fmt;

use super::expr::{Expression, Identifier};
use crate::Span;

/// `let <name> = <value>;`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// `return <value>;` or a bare `return;`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    /// A bare expression; its value is the statement's value.
    Expression(Expression),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Let(stmt) => stmt.span,
            Statement::Return(stmt) => stmt.span,
            Statement::Expression(expr) => expr.span(),
        }
    }
}

/// `{ <statements> }`, used as a function body or a branch of `if`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Root of a parsed source text.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Render a statement list. Expression statements other than the last one
/// get a `;` so adjacent expressions cannot fuse when re-parsed.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    let last = statements.len().saturating_sub(1);
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{stmt}")?;
        if i < last && matches!(stmt, Statement::Expression(_)) {
            f.write_str(";")?;
        }
    }
    Ok(())
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {value};"),
            None => f.write_str("return;"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{stmt}"),
            Statement::Return(stmt) => write!(f, "{stmt}"),
            Statement::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}
