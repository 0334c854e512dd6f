use pretty_assertions::assert_eq;

use super::{assert_evaluates, eval_in, eval_value};
use crate::{buffer_handler, Environment, Interpreter, Object};

#[test]
fn test_error_messages() {
    assert_evaluates(&[
        ("5 + true;", Object::error("type mismatch: INTEGER + BOOLEAN")),
        ("5 + true; 5;", Object::error("type mismatch: INTEGER + BOOLEAN")),
        ("-true", Object::error("unknown operator: -BOOLEAN")),
        ("true + false;", Object::error("unknown operator: BOOLEAN + BOOLEAN")),
        (
            "5; true + false; 5",
            Object::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        (
            "if (10 > 1) { true + false; }",
            Object::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            Object::error("unknown operator: BOOLEAN + BOOLEAN"),
        ),
        ("foobar", Object::error("identifier not found: foobar")),
        (
            "\"Hello\" - \"World\"",
            Object::error("unknown operator: STRING - STRING"),
        ),
        (
            "{\"name\": \"Monkey\"}[fn(x) { x }];",
            Object::error("unusable as hash key: FUNCTION"),
        ),
        (
            "{[1]: 2}",
            Object::error("unusable as hash key: ARRAY"),
        ),
    ]);
}

#[test]
fn test_supplementary_runtime_errors() {
    assert_evaluates(&[
        ("1 / 0", Object::error("division by zero")),
        (
            "9223372036854775807 + 1",
            Object::error("integer overflow in addition"),
        ),
        ("5(1)", Object::error("not a function: INTEGER")),
        ("1[0]", Object::error("index operator not supported: INTEGER")),
        (
            "[1][\"a\"]",
            Object::error("index operator not supported: ARRAY"),
        ),
        (
            "fn(a, b) { a }(1)",
            Object::error("wrong number of arguments: want=2, got=1"),
        ),
        (
            "fn() { 1 }(1, 2)",
            Object::error("wrong number of arguments: want=0, got=2"),
        ),
    ]);
}

#[test]
fn test_error_inspect() {
    assert_eq!(
        eval_value("foobar").to_string(),
        "ERROR: identifier not found: foobar"
    );
}

#[test]
fn test_errors_stop_sibling_evaluation() {
    let printer = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(printer.clone())
        .build();
    let env = Environment::new();

    let result = eval_in(
        &interpreter,
        &env,
        "let log = fn(x) { puts(x); x }; [missing, log(1)]",
    );
    assert_eq!(result, Some(Object::error("identifier not found: missing")));

    let result = eval_in(&interpreter, &env, "log(1) + missing + log(2)");
    assert_eq!(result, Some(Object::error("identifier not found: missing")));

    let result = eval_in(&interpreter, &env, "let x = missing; puts(\"after\")");
    assert_eq!(result, Some(Object::error("identifier not found: missing")));
    assert_eq!(env.get("x"), None);

    assert_eq!(printer.get_output(), "1\n");
}

#[test]
fn test_error_inside_function_stops_the_caller() {
    assert_evaluates(&[(
        "let f = fn() { missing; 1 }; f(); 2",
        Object::error("identifier not found: missing"),
    )]);
}
