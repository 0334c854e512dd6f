//! Prefix operator evaluation.

use monkey_ir::PrefixOp;

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::{EvalResult, Object};

/// Evaluate `<op><operand>` on an already-evaluated operand.
pub fn evaluate_prefix(operand: &Object, op: PrefixOp) -> EvalResult {
    match (operand, op) {
        (_, PrefixOp::Not) => Ok(Object::boolean(!operand.is_truthy())),
        (Object::Integer(n), PrefixOp::Neg) => n
            .checked_neg()
            .map(Object::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (_, PrefixOp::Neg) => Err(unknown_prefix_operator(op, operand.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bang_uses_truthiness() {
        assert_eq!(evaluate_prefix(&Object::TRUE, PrefixOp::Not), Ok(Object::FALSE));
        assert_eq!(evaluate_prefix(&Object::NULL, PrefixOp::Not), Ok(Object::TRUE));
        assert_eq!(evaluate_prefix(&Object::Integer(0), PrefixOp::Not), Ok(Object::FALSE));
        assert_eq!(evaluate_prefix(&Object::string(""), PrefixOp::Not), Ok(Object::FALSE));
    }

    #[test]
    fn minus_negates_integers() {
        assert_eq!(
            evaluate_prefix(&Object::Integer(5), PrefixOp::Neg),
            Ok(Object::Integer(-5))
        );
        assert_eq!(
            evaluate_prefix(&Object::Integer(i64::MIN), PrefixOp::Neg),
            Err(Object::error("integer overflow in negation"))
        );
    }

    #[test]
    fn minus_rejects_other_types() {
        assert_eq!(
            evaluate_prefix(&Object::TRUE, PrefixOp::Neg),
            Err(Object::error("unknown operator: -BOOLEAN"))
        );
        assert_eq!(
            evaluate_prefix(&Object::string("a"), PrefixOp::Neg),
            Err(Object::error("unknown operator: -STRING"))
        );
    }
}
