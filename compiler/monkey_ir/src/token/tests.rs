use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lookup_keywords() {
    assert_eq!(TokenKind::lookup_ident("fn"), TokenKind::Function);
    assert_eq!(TokenKind::lookup_ident("let"), TokenKind::Let);
    assert_eq!(TokenKind::lookup_ident("true"), TokenKind::True);
    assert_eq!(TokenKind::lookup_ident("false"), TokenKind::False);
    assert_eq!(TokenKind::lookup_ident("if"), TokenKind::If);
    assert_eq!(TokenKind::lookup_ident("else"), TokenKind::Else);
    assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
}

#[test]
fn test_lookup_falls_back_to_ident() {
    assert_eq!(TokenKind::lookup_ident("foobar"), TokenKind::Ident);
    assert_eq!(TokenKind::lookup_ident("fnord"), TokenKind::Ident);
    assert_eq!(TokenKind::lookup_ident("Let"), TokenKind::Ident);
}

#[test]
fn test_is_keyword() {
    assert!(TokenKind::Return.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Assign.is_keyword());
}

#[test]
fn test_display_names() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn test_token_debug_includes_literal_and_span() {
    let token = Token::new(TokenKind::Int, "42", Span::new(3, 5));
    assert_eq!(format!("{token:?}"), "Int(\"42\") @ 3..5");
}

#[test]
fn test_eof_token() {
    let token = Token::eof(9);
    assert!(token.is(TokenKind::Eof));
    assert_eq!(token.literal, "");
    assert_eq!(token.span, Span::point(9));
}
