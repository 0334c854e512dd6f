#![allow(clippy::unwrap_used, clippy::expect_used)]

use monkey_eval::{buffer_handler, Interpreter, Object, SharedPrintHandler};
use monkey_parse::ParseError;
use pretty_assertions::assert_eq;

use crate::commands::{lex_source, parse_source, run_repl, run_source};
use crate::{Outcome, Session};

fn buffered_session() -> (Session, SharedPrintHandler) {
    let printer = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(printer.clone())
        .build();
    (Session::with_interpreter(interpreter), printer)
}

fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

// -- Session --

#[test]
fn test_session_value_and_no_value() {
    let (mut session, _) = buffered_session();
    assert_eq!(session.eval_source("1 + 2"), Outcome::Value(Object::Integer(3)));
    assert_eq!(session.eval_source("let x = 5;"), Outcome::NoValue);
    assert_eq!(session.eval_source(""), Outcome::NoValue);
}

#[test]
fn test_session_bindings_persist() {
    let (mut session, _) = buffered_session();
    session.eval_source("let x = 5;");
    session.eval_source("let double = fn(n) { n * 2 };");
    assert_eq!(
        session.eval_source("double(x)"),
        Outcome::Value(Object::Integer(10))
    );
    assert!(session.env().contains_local("double"));
}

#[test]
fn test_session_parse_errors_skip_evaluation() {
    let (mut session, printer) = buffered_session();
    let Outcome::ParseErrors(errors) = session.eval_source("puts(1); let = 2;") else {
        panic!("expected parse errors");
    };
    assert!(matches!(errors[0], ParseError::UnexpectedToken { .. }));
    assert_eq!(printer.get_output(), "");
}

#[test]
fn test_session_runtime_error_is_a_value() {
    let (mut session, _) = buffered_session();
    assert_eq!(
        session.eval_source("missing"),
        Outcome::Value(Object::error("identifier not found: missing"))
    );
}

#[test]
fn test_session_deep_nesting() {
    let (mut session, _) = buffered_session();
    let source = format!("{}1", "-".repeat(100_000));
    assert_eq!(session.eval_source(&source), Outcome::Value(Object::Integer(1)));
    assert_eq!(
        session.eval_source(&format!("-{source}")),
        Outcome::Value(Object::Integer(-1))
    );
}

// -- REPL --

#[test]
fn test_repl_prints_values_and_errors() {
    let (mut session, printer) = buffered_session();
    let input = "let a = 2;\na * 21\nlet = 1;\nputs(\"hi\")\nnope\n";
    let mut out = Vec::new();
    let mut err = Vec::new();

    run_repl(&mut session, input.as_bytes(), &mut out, &mut err).unwrap();

    assert_eq!(
        utf8(out),
        ">> >> 42\n>> >> null\n>> ERROR: identifier not found: nope\n>> \n"
    );
    assert_eq!(
        utf8(err),
        "expected next token to be IDENT, got = instead\nno parse rule for token =\n"
    );
    assert_eq!(printer.get_output(), "hi\n");
}

#[test]
fn test_repl_empty_input() {
    let mut session = buffered_session().0;
    let mut out = Vec::new();
    let mut err = Vec::new();

    run_repl(&mut session, "".as_bytes(), &mut out, &mut err).unwrap();

    assert_eq!(utf8(out), ">> \n");
    assert!(err.is_empty());
}

// -- run --

#[test]
fn test_run_success() {
    let (mut session, printer) = buffered_session();
    let mut err = Vec::new();
    let source = "let greet = fn(name) { \"Hello, \" + name };\nputs(greet(\"Monkey\"));\n";

    let status = run_source(&mut session, "hello.mk", source, &mut err).unwrap();

    assert_eq!(status, 0);
    assert!(err.is_empty());
    assert_eq!(printer.get_output(), "Hello, Monkey\n");
}

#[test]
fn test_run_reports_parse_error_locations() {
    let mut session = buffered_session().0;
    let mut err = Vec::new();
    let source = "let a = 1;\nlet b 2;\n";

    let status = run_source(&mut session, "bad.mk", source, &mut err).unwrap();

    assert_eq!(status, 1);
    assert_eq!(
        utf8(err),
        "bad.mk:2:7: expected next token to be =, got INT instead\n"
    );
}

#[test]
fn test_run_reports_runtime_errors() {
    let mut session = buffered_session().0;
    let mut err = Vec::new();

    let status = run_source(&mut session, "err.mk", "let x = 1;\nx + true", &mut err).unwrap();

    assert_eq!(status, 1);
    assert_eq!(utf8(err), "ERROR: type mismatch: INTEGER + BOOLEAN\n");
}

// -- lex / parse --

#[test]
fn test_lex_source_lists_tokens() {
    let mut out = Vec::new();
    lex_source("t.mk", "let x = 5;", &mut out).unwrap();
    assert_eq!(
        utf8(out),
        "Tokens for 't.mk' (6 tokens):\n\
         \x20 Let(\"let\") @ 0..3\n\
         \x20 Ident(\"x\") @ 4..5\n\
         \x20 Assign(\"=\") @ 6..7\n\
         \x20 Int(\"5\") @ 8..9\n\
         \x20 Semicolon(\";\") @ 9..10\n\
         \x20 Eof(\"\") @ 10..10\n"
    );
}

#[test]
fn test_parse_source_renders_statements() {
    let mut out = Vec::new();
    let status = parse_source("t.mk", "let x = 1 + 2 * 3; -x", &mut out).unwrap();
    assert_eq!(status, 0);
    assert_eq!(
        utf8(out),
        "Parse result for 't.mk' (2 statements):\n  let x = (1 + (2 * 3));\n  (-x)\n"
    );
}

#[test]
fn test_parse_source_reports_errors() {
    let mut out = Vec::new();
    let status = parse_source("t.mk", "\n  )", &mut out).unwrap();
    assert_eq!(status, 1);
    assert_eq!(
        utf8(out),
        "Errors in 't.mk':\n  t.mk:2:3: no parse rule for token )\n"
    );
}
