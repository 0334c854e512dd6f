//! Runtime error constructors.
//!
//! Every runtime error message is built here.

use monkey_ir::{InfixOp, PrefixOp};

use crate::{Object, ObjectKind};

// Identifier and Call Errors

#[cold]
pub fn identifier_not_found(name: &str) -> Object {
    Object::error(format!("identifier not found: {name}"))
}

#[cold]
pub fn not_a_function(kind: ObjectKind) -> Object {
    Object::error(format!("not a function: {kind}"))
}

/// Arity mismatch when calling a user-defined function.
#[cold]
pub fn wrong_argument_count(want: usize, got: usize) -> Object {
    Object::error(format!("wrong number of arguments: want={want}, got={got}"))
}

// Operator Errors

#[cold]
pub fn type_mismatch(left: ObjectKind, op: InfixOp, right: ObjectKind) -> Object {
    Object::error(format!("type mismatch: {left} {op} {right}"))
}

#[cold]
pub fn unknown_infix_operator(left: ObjectKind, op: InfixOp, right: ObjectKind) -> Object {
    Object::error(format!("unknown operator: {left} {op} {right}"))
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: ObjectKind) -> Object {
    Object::error(format!("unknown operator: {op}{operand}"))
}

#[cold]
pub fn division_by_zero() -> Object {
    Object::error("division by zero")
}

#[cold]
pub fn integer_overflow(operation: &str) -> Object {
    Object::error(format!("integer overflow in {operation}"))
}

// Index and Hash Errors

#[cold]
pub fn unusable_as_hash_key(kind: ObjectKind) -> Object {
    Object::error(format!("unusable as hash key: {kind}"))
}

#[cold]
pub fn index_not_supported(kind: ObjectKind) -> Object {
    Object::error(format!("index operator not supported: {kind}"))
}

// Builtin Argument Errors

#[cold]
pub fn builtin_argument_count(got: usize, want: usize) -> Object {
    Object::error(format!("wrong number of arguments. got={got}, want={want}"))
}

#[cold]
pub fn argument_not_supported(builtin: &str, kind: ObjectKind) -> Object {
    Object::error(format!("argument to `{builtin}` not supported, got {kind}"))
}

#[cold]
pub fn argument_must_be_array(builtin: &str, kind: ObjectKind) -> Object {
    Object::error(format!("argument to `{builtin}` must be ARRAY, got {kind}"))
}
