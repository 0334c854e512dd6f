//! Infix-position expressions and the shared list routine.

use monkey_ir::{CallExpression, Expression, IndexExpression, InfixExpression, TokenKind};

use super::operators::infix_op;
use super::Precedence;
use crate::Parser;

impl Parser<'_> {
    /// `<left> <op> <expr>`, starting on the operator.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let op = infix_op(self.cursor.current_kind())?;
        let precedence = self.current_precedence();
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        let span = left.span().merge(right.span());
        Some(Expression::Infix(InfixExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }))
    }

    /// `<function>( <args> )`, starting on `(`.
    pub(super) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        let span = self.span_from(function.span());
        Some(Expression::Call(CallExpression {
            function: Box::new(function),
            arguments,
            span,
        }))
    }

    /// `<left>[ <index> ]`, starting on `[`.
    pub(super) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        let span = self.span_from(left.span());
        Some(Expression::Index(IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
            span,
        }))
    }

    pub(super) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        self.parse_comma_separated(end, |parser| {
            parser.parse_expression(Precedence::Lowest)
        })
    }

    /// Parse `item (, item)*` up to the closing `end` token.
    ///
    /// Starts on the opening delimiter and ends on `end`. Each `item` call
    /// starts on the item's first token.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        end: TokenKind,
        mut item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<Vec<T>> {
        let mut items = Vec::new();
        if self.cursor.peek_is(end) {
            self.cursor.advance();
            return Some(items);
        }

        self.cursor.advance();
        items.push(item(self)?);
        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(item(self)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }
}
