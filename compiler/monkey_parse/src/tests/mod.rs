//! Parser tests.
//!
//! - `statements`: let/return/expression statements and blocks
//! - `expressions`: literals, operators, `if`, `fn`, calls, collections
//! - `precedence`: canonical rendering of operator-heavy input
//! - `errors`: recorded messages and recovery
//! - `roundtrip`: rendering is a fixed point of parse-then-render

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::parse;
use monkey_ir::{Program, Statement};

/// Parse `source`, failing the test on any parse error.
fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );
    output.program
}

/// Parse a single expression statement and return its expression.
fn parse_single_expression(source: &str) -> monkey_ir::Expression {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "expected one statement in {source:?}");
    match program.statements.into_iter().next() {
        Some(Statement::Expression(expr)) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Error messages recorded while parsing `source`.
fn error_messages(source: &str) -> Vec<String> {
    parse(source).errors.iter().map(ToString::to_string).collect()
}
