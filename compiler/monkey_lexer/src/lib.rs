//! Lexer for Monkey using logos.
//!
//! [`Lexer`] is lazy: each [`Lexer::next_token`] call scans one token and
//! returns an EOF token forever once the input is exhausted. [`lex`]
//! collects a whole source text, ending with exactly one EOF.
//!
//! Keywords are scanned as identifiers and promoted afterwards through
//! [`TokenKind::lookup_ident`]. String literals have no escapes; an
//! unterminated string runs to the end of input without a diagnostic.

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind};

/// Raw token from logos (before keyword lookup and literal extraction).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Sign is never part of the literal; `-` is a prefix operator.
    #[regex(r"[0-9]+")]
    Int,

    // Closing quote is optional so unterminated strings stop at end of input.
    #[regex(r#""[^"]*"?"#)]
    String,

    // Identifier or keyword
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Lazy token source over a borrowed source text.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Set once the iterator has yielded EOF.
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            exhausted: false,
        }
    }

    /// Scan the next token. Returns EOF on every call after the input ends.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.raw.next() else {
            let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
            return Token::eof(end);
        };

        let range = self.raw.span();
        let span = Span::from_range(range.clone());
        let slice = self.source.get(range).unwrap_or_default();

        match result {
            Ok(raw) => convert_token(raw, slice, span),
            // A single character no rule accepts.
            Err(()) => Token::new(TokenKind::Illegal, slice, span),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first EOF.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}

/// Lex a whole source text. The result always ends with a single EOF token.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn convert_token(raw: RawToken, slice: &str, span: Span) -> Token {
    let kind = match raw {
        RawToken::Ident => TokenKind::lookup_ident(slice),
        RawToken::Int => TokenKind::Int,
        RawToken::String => {
            let content = slice.strip_prefix('"').unwrap_or(slice);
            let content = content.strip_suffix('"').unwrap_or(content);
            return Token::new(TokenKind::String, content, span);
        }

        // Operators
        RawToken::EqEq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        // Delimiters
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Token::new(kind, slice, span)
}
