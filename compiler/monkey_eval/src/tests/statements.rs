use pretty_assertions::assert_eq;

use super::{assert_evaluates, eval, eval_in};
use crate::{silent_handler, Environment, Interpreter, Object};
use monkey_ir::Node;

#[test]
fn test_let_statements() {
    assert_evaluates(&[
        ("let a = 5; a;", Object::Integer(5)),
        ("let a = 5 * 5; a;", Object::Integer(25)),
        ("let a = 5; let b = a; b;", Object::Integer(5)),
        ("let a = 5; let b = a; let c = a + b + 5; c;", Object::Integer(15)),
    ]);
}

#[test]
fn test_let_produces_no_value() {
    assert_eq!(eval("let x = 5;"), None);
    assert_eq!(eval("5; let x = 5;"), None);
    assert_eq!(eval(""), None);
}

#[test]
fn test_return_statements() {
    assert_evaluates(&[
        ("return 10;", Object::Integer(10)),
        ("return 10; 9;", Object::Integer(10)),
        ("return 2 * 5; 9;", Object::Integer(10)),
        ("9; return 2 * 5; 9;", Object::Integer(10)),
        ("if (10 > 1) { return 10; }", Object::Integer(10)),
        (
            "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
            Object::Integer(10),
        ),
        ("return;", Object::NULL),
    ]);
}

#[test]
fn test_program_never_leaks_return_signal() {
    let value = eval("if (true) { return 1; }").unwrap();
    assert_eq!(value, Object::Integer(1));
}

#[test]
fn test_bindings_persist_across_programs() {
    let interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    let env = Environment::new();
    assert_eq!(eval_in(&interpreter, &env, "let x = 2;"), None);
    assert_eq!(eval_in(&interpreter, &env, "let double = fn(n) { n * 2 };"), None);
    assert_eq!(
        eval_in(&interpreter, &env, "double(x)"),
        Some(Object::Integer(4))
    );
}

#[test]
fn test_eval_node_passes_return_signal_through() {
    let program = monkey_parse::parse("return 3;").program;
    let interpreter = Interpreter::new();
    let env = Environment::new();

    let stmt = &program.statements[0];
    assert_eq!(
        interpreter.eval_node(Node::from(stmt), &env),
        Some(Object::return_value(Object::Integer(3)))
    );
    assert_eq!(
        interpreter.eval_node(Node::from(&program), &env),
        Some(Object::Integer(3))
    );
}
