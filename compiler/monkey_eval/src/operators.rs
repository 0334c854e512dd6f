//! Infix operator evaluation.
//!
//! Dispatch is by pattern matching on the operand pair. Integer arithmetic
//! is checked: overflow and division by zero produce error objects.

use monkey_ir::InfixOp;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator};
use crate::{EvalResult, Object, ObjectKind};

#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Object::Integer)
        .ok_or_else(|| integer_overflow(operation))
}

/// Evaluate `left <op> right` on already-evaluated operands.
pub fn evaluate_infix(left: &Object, right: &Object, op: InfixOp) -> EvalResult {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(*a, *b, op),
        (Object::Str(a), Object::Str(b)) => eval_string_infix(a, b, op),
        _ => match op {
            InfixOp::Eq => Ok(Object::boolean(left.is_identical(right))),
            InfixOp::NotEq => Ok(Object::boolean(!left.is_identical(right))),
            _ if left.kind() != right.kind() => Err(type_mismatch(left.kind(), op, right.kind())),
            _ => Err(unknown_infix_operator(left.kind(), op, right.kind())),
        },
    }
}

fn eval_integer_infix(a: i64, b: i64, op: InfixOp) -> EvalResult {
    match op {
        InfixOp::Add => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Div if b == 0 => Err(division_by_zero()),
        // Truncates toward zero.
        InfixOp::Div => checked_arith(a.checked_div(b), "division"),
        InfixOp::Lt => Ok(Object::boolean(a < b)),
        InfixOp::Gt => Ok(Object::boolean(a > b)),
        InfixOp::Eq => Ok(Object::boolean(a == b)),
        InfixOp::NotEq => Ok(Object::boolean(a != b)),
    }
}

fn eval_string_infix(a: &str, b: &str, op: InfixOp) -> EvalResult {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Object::string(joined))
        }
        _ => Err(unknown_infix_operator(ObjectKind::String, op, ObjectKind::String)),
    }
}
