//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: precedence levels and the Pratt loop (`parse_expression`)
//! - `operators.rs`: prefix/infix rule tables and token-to-operator mapping
//! - `primary.rs`: literals, identifiers, prefix operators, grouping, `if`, `fn`,
//!   array and hash literals
//! - `postfix.rs`: infix operators, calls, indexing, comma-separated lists

mod operators;
mod postfix;
mod primary;

use monkey_ir::{Expression, TokenKind};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Binding power of operators, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)` `a[i]`
    Call,
}

impl<'src> Parser<'src> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Starts on the expression's first token; ends on its last.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let kind = self.cursor.current_kind();
        let Some(prefix) = Self::prefix_rule(kind) else {
            let span = self.cursor.current_span();
            self.record(ParseError::NoPrefixRule { kind, span });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.cursor.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some((_, infix)) = Self::infix_rule(self.cursor.peek_kind()) else {
                return Some(left);
            };
            self.cursor.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn peek_precedence(&self) -> Precedence {
        Self::infix_rule(self.cursor.peek_kind()).map_or(Precedence::Lowest, |(prec, _)| prec)
    }

    fn current_precedence(&self) -> Precedence {
        Self::infix_rule(self.cursor.current_kind()).map_or(Precedence::Lowest, |(prec, _)| prec)
    }
}
