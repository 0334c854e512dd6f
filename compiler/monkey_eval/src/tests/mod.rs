//! Evaluator tests, run end to end from source text.
//!
//! - `expressions`: literals, operators, conditionals
//! - `statements`: `let`, `return`, program results
//! - `functions`: application, closures, recursion
//! - `collections`: arrays, hashes, indexing
//! - `builtins`: the builtin table through the evaluator
//! - `errors`: runtime error messages and short-circuiting

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod collections;
mod errors;
mod statements;

use crate::{silent_handler, Environment, Interpreter, Object};

/// Parse `source` and evaluate it in a fresh root environment.
fn eval_in(interpreter: &Interpreter, env: &Environment, source: &str) -> Option<Object> {
    let output = monkey_parse::parse(source);
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.errors
    );
    interpreter.eval_program(&output.program, env)
}

fn eval(source: &str) -> Option<Object> {
    let interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    eval_in(&interpreter, &Environment::new(), source)
}

/// Evaluate `source`, which must produce a value.
fn eval_value(source: &str) -> Object {
    eval(source).unwrap_or_else(|| panic!("{source:?} produced no value"))
}

fn assert_evaluates(cases: &[(&str, Object)]) {
    for (source, expected) in cases {
        pretty_assertions::assert_eq!(&eval_value(source), expected, "source: {source}");
    }
}
