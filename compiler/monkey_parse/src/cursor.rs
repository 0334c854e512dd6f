//! Two-token lookahead over the lazy lexer.

use monkey_ir::{Span, Token, TokenKind};
use monkey_lexer::Lexer;
use tracing::trace;

/// Cursor holding the `current` and `peek` tokens.
///
/// Both always hold a token; past the end of input they are EOF.
pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Cursor {
            lexer,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shift `peek` into `current` and pull the next token from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            kind = %self.current.kind,
            literal = %self.current.literal,
            span_start = self.current.span.start,
            span_end = self.current.span.end,
            "advance"
        );
    }
}
