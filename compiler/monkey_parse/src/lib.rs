//! Pratt parser for Monkey.
//!
//! Statements are parsed by recursive descent; expressions by precedence
//! climbing over per-token prefix and infix rules. Errors are collected
//! rather than returned early: a failed sub-parse records a [`ParseError`]
//! and yields `None`, and the statement loop keeps going with the next
//! token. A program with errors may be incomplete and must not be evaluated.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use monkey_ir::{Program, Span, TokenKind};
use tracing::debug;

/// Result of parsing a whole source text.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Check if any errors were recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned on the first token of `source`.
    pub fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            errors: Vec::new(),
        }
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn record(&mut self, error: ParseError) {
        debug!(%error, span = ?error.span(), "parse error");
        self.errors.push(error);
    }

    /// Advance if the peek token has kind `expected`; otherwise record an
    /// error and leave the cursor where it is.
    fn expect_peek(&mut self, expected: TokenKind) -> Option<()> {
        if self.cursor.peek_is(expected) {
            self.cursor.advance();
            Some(())
        } else {
            let peek = self.cursor.peek();
            let error = ParseError::UnexpectedToken {
                expected,
                found: peek.kind,
                span: peek.span,
            };
            self.record(error);
            None
        }
    }

    /// Span from `start` through the current token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.current_span())
    }
}

/// Parse `source` into a program plus every recorded error.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.into_errors(),
    }
}

#[cfg(test)]
mod tests;
