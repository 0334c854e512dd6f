//! Monkey IR - Token and AST types
//!
//! This crate contains the data structures shared by every stage of the
//! Monkey pipeline:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes (statements, expressions, the `Program` root)
//!
//! Every AST node renders a canonical textual form through `Display`.
//! Prefix and infix expressions are always parenthesized, so parsing the
//! rendering of a tree reproduces the same tree.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BlockStatement, CallExpression, Expression, FunctionLiteral, HashLiteral, Identifier,
    IfExpression, IndexExpression, InfixExpression, InfixOp, LetStatement, Node,
    PrefixExpression, PrefixOp, Program, ReturnStatement, Statement,
};
pub use span::{LineOffsetTable, Span};
pub use token::{Token, TokenKind};
