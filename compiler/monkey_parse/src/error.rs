//! Parse error types.

use monkey_ir::{Span, TokenKind};

/// A recoverable parse error.
///
/// The `Display` text is the message shown to users.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An `expect_peek` check failed.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// The token cannot start an expression.
    #[error("no parse rule for token {kind}")]
    NoPrefixRule { kind: TokenKind, span: Span },

    /// Integer literal does not fit in an `i64`.
    #[error("could not parse {literal} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixRule { span, .. }
            | ParseError::InvalidInteger { span, .. } => *span,
        }
    }
}
