//! Rule tables for the Pratt loop.
//!
//! A token kind that can start an expression has a prefix rule; one that
//! can continue an expression has an infix rule and a precedence.

use monkey_ir::{Expression, InfixOp, PrefixOp, TokenKind};

use super::Precedence;
use crate::Parser;

pub(super) type PrefixRule<'src> = fn(&mut Parser<'src>) -> Option<Expression>;
pub(super) type InfixRule<'src> = fn(&mut Parser<'src>, Expression) -> Option<Expression>;

impl<'src> Parser<'src> {
    pub(super) fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<'src>> {
        let rule: PrefixRule<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(rule)
    }

    pub(super) fn infix_rule(kind: TokenKind) -> Option<(Precedence, InfixRule<'src>)> {
        let entry: (Precedence, InfixRule<'src>) = match kind {
            TokenKind::Eq | TokenKind::NotEq => (Precedence::Equals, Self::parse_infix_expression),
            TokenKind::Lt | TokenKind::Gt => {
                (Precedence::LessGreater, Self::parse_infix_expression)
            }
            TokenKind::Plus | TokenKind::Minus => (Precedence::Sum, Self::parse_infix_expression),
            TokenKind::Asterisk | TokenKind::Slash => {
                (Precedence::Product, Self::parse_infix_expression)
            }
            TokenKind::LParen => (Precedence::Call, Self::parse_call_expression),
            TokenKind::LBracket => (Precedence::Call, Self::parse_index_expression),
            _ => return None,
        };
        Some(entry)
    }
}

/// Map a prefix operator token to its operator.
pub(super) fn prefix_op(kind: TokenKind) -> Option<PrefixOp> {
    match kind {
        TokenKind::Bang => Some(PrefixOp::Not),
        TokenKind::Minus => Some(PrefixOp::Neg),
        _ => None,
    }
}

/// Map an infix operator token to its operator.
pub(super) fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Add),
        TokenKind::Minus => Some(InfixOp::Sub),
        TokenKind::Asterisk => Some(InfixOp::Mul),
        TokenKind::Slash => Some(InfixOp::Div),
        TokenKind::Lt => Some(InfixOp::Lt),
        TokenKind::Gt => Some(InfixOp::Gt),
        TokenKind::Eq => Some(InfixOp::Eq),
        TokenKind::NotEq => Some(InfixOp::NotEq),
        _ => None,
    }
}
