//! Prefix-position expressions.

use std::rc::Rc;

use monkey_ir::{
    Expression, FunctionLiteral, HashLiteral, Identifier, IfExpression, PrefixExpression,
    TokenKind,
};
use tracing::trace;

use super::operators::prefix_op;
use super::Precedence;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Identifier node from the current token.
    pub(crate) fn parse_identifier_node(&self) -> Identifier {
        let token = self.cursor.current();
        Identifier::new(token.literal.clone(), token.span)
    }

    pub(super) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.parse_identifier_node()))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.current();
        let span = token.span;
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer { value, span }),
            Err(_) => {
                let literal = token.literal.clone();
                self.record(ParseError::InvalidInteger { literal, span });
                None
            }
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.current();
        Some(Expression::String {
            value: token.literal.clone(),
            span: token.span,
        })
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean {
            value: self.cursor.current_is(TokenKind::True),
            span: self.cursor.current_span(),
        })
    }

    /// `!<expr>` or `-<expr>`
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let start = self.cursor.current_span();
        let op = prefix_op(self.cursor.current_kind())?;
        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            op,
            operand: Box::new(operand),
            span: self.span_from(start),
        }))
    }

    /// `( <expr> )`; produces the inner expression, no wrapper node.
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// `if ( <expr> ) { ... } else { ... }`
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        let start = self.cursor.current_span();

        self.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.cursor.peek_is(TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
            span: self.span_from(start),
        }))
    }

    /// `fn ( <params> ) { ... }`
    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        let start = self.cursor.current_span();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_parameter)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        trace!(params = parameters.len(), "function literal");
        Some(Expression::Function(Rc::new(FunctionLiteral {
            parameters,
            body,
            span: self.span_from(start),
        })))
    }

    fn parse_parameter(&mut self) -> Option<Identifier> {
        if self.cursor.current_is(TokenKind::Ident) {
            Some(self.parse_identifier_node())
        } else {
            let current = self.cursor.current();
            let error = ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                found: current.kind,
                span: current.span,
            };
            self.record(error);
            None
        }
    }

    /// `[ <expr>, ... ]`
    pub(super) fn parse_array_literal(&mut self) -> Option<Expression> {
        let start = self.cursor.current_span();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array {
            elements,
            span: self.span_from(start),
        })
    }

    /// `{ <key>: <value>, ... }`
    pub(super) fn parse_hash_literal(&mut self) -> Option<Expression> {
        let start = self.cursor.current_span();
        let pairs = self.parse_comma_separated(TokenKind::RBrace, Self::parse_hash_pair)?;
        Some(Expression::Hash(HashLiteral {
            pairs,
            span: self.span_from(start),
        }))
    }

    fn parse_hash_pair(&mut self) -> Option<(Expression, Expression)> {
        let key = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Colon)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        Some((key, value))
    }
}
