//! The tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: statement and expression evaluation
//! - `call.rs`: function application
//! - `builder.rs`: [`InterpreterBuilder`]
//!
//! Statement evaluation yields `Ok(None)` for statements without a value
//! (`let`). Errors and return signals travel on the `Err` side and unwind
//! with `?` until a function call or the program consumes them.

mod builder;
mod call;

use std::rc::Rc;

use monkey_ir::{
    BlockStatement, Expression, HashLiteral, IfExpression, IndexExpression, Node, Program,
    Statement,
};
use monkey_stack::ensure_sufficient_stack;
use tracing::debug;

pub use builder::InterpreterBuilder;

use crate::errors::{identifier_not_found, index_not_supported, unusable_as_hash_key};
use crate::{
    evaluate_infix, evaluate_prefix, Builtin, Environment, EvalResult, FunctionObject,
    HashObject, Object, SharedPrintHandler,
};

/// Result of evaluating a statement: a value, or none for `let`.
type StatementResult = Result<Option<Object>, Object>;

/// Evaluates programs against caller-owned environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Destination of `puts` output.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a program.
    ///
    /// Returns the value of the last statement, the value of a top-level
    /// `return`, or the first runtime error. `None` when the last statement
    /// has no value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Option<Object> {
        let mut result = None;
        for stmt in &program.statements {
            match self.eval_statement(stmt, env) {
                Ok(value) => result = value,
                Err(Object::ReturnValue(value)) => return Some(Rc::unwrap_or_clone(value)),
                Err(error) => {
                    debug!(%error, "runtime error");
                    return Some(error);
                }
            }
        }
        result
    }

    /// Evaluate any node.
    ///
    /// Unlike [`Interpreter::eval_program`], a return signal from a
    /// statement or block is passed back as-is.
    pub fn eval_node(&self, node: Node<'_>, env: &Environment) -> Option<Object> {
        let settle = |result: StatementResult| result.unwrap_or_else(Some);
        match node {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(stmt) => settle(self.eval_statement(stmt, env)),
            Node::Block(block) => settle(self.eval_block(block, env)),
            Node::Expression(expr) => {
                Some(self.eval_expression(expr, env).unwrap_or_else(|signal| signal))
            }
        }
    }

    fn eval_statement(&self, stmt: &Statement, env: &Environment) -> StatementResult {
        match stmt {
            Statement::Let(let_stmt) => {
                let value = self.eval_expression(&let_stmt.value, env)?;
                env.set(let_stmt.name.name.clone(), value);
                Ok(None)
            }
            Statement::Return(ret) => {
                let value = match &ret.value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => Object::NULL,
                };
                Err(Object::return_value(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env).map(Some),
        }
    }

    /// Evaluate statements in order; the first error or return signal stops
    /// the block and propagates.
    fn eval_block(&self, block: &BlockStatement, env: &Environment) -> StatementResult {
        let mut result = None;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
        }
        Ok(result)
    }

    fn eval_expression(&self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Integer { value, .. } => Ok(Object::Integer(*value)),
            Expression::String { value, .. } => Ok(Object::string(value.as_str())),
            Expression::Boolean { value, .. } => Ok(Object::boolean(*value)),
            Expression::Identifier(ident) => env
                .get(&ident.name)
                .or_else(|| Builtin::lookup(&ident.name).map(Object::Builtin))
                .ok_or_else(|| identifier_not_found(&ident.name)),
            Expression::Prefix(prefix) => {
                let operand = self.eval_expression(&prefix.operand, env)?;
                evaluate_prefix(&operand, prefix.op)
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env)?;
                let right = self.eval_expression(&infix.right, env)?;
                evaluate_infix(&left, &right, infix.op)
            }
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::Function(literal) => Ok(Object::Function(Rc::new(FunctionObject::new(
                Rc::clone(literal),
                env.clone(),
            )))),
            Expression::Call(call) => {
                let function = self.eval_expression(&call.function, env)?;
                let args = self.eval_expressions(&call.arguments, env)?;
                self.apply_function(&function, args)
            }
            Expression::Array { elements, .. } => {
                Ok(Object::array(self.eval_expressions(elements, env)?))
            }
            Expression::Index(index) => self.eval_index(index, env),
            Expression::Hash(hash) => self.eval_hash_literal(hash, env),
        }
    }

    /// Evaluate left to right, stopping at the first error.
    fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Object>, Object> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    fn eval_if(&self, if_expr: &IfExpression, env: &Environment) -> EvalResult {
        let condition = self.eval_expression(&if_expr.condition, env)?;
        let branch = if condition.is_truthy() {
            Some(&if_expr.consequence)
        } else {
            if_expr.alternative.as_ref()
        };
        match branch {
            Some(block) => Ok(self.eval_block(block, env)?.unwrap_or(Object::NULL)),
            None => Ok(Object::NULL),
        }
    }

    fn eval_index(&self, index: &IndexExpression, env: &Environment) -> EvalResult {
        let left = self.eval_expression(&index.left, env)?;
        let key = self.eval_expression(&index.index, env)?;
        match (&left, &key) {
            (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
                .ok()
                .and_then(|i| elements.get(i))
                .cloned()
                .unwrap_or(Object::NULL)),
            (Object::Hash(hash), _) => {
                let hash_key = key
                    .hash_key()
                    .ok_or_else(|| unusable_as_hash_key(key.kind()))?;
                Ok(hash
                    .get(&hash_key)
                    .map_or(Object::NULL, |pair| pair.value.clone()))
            }
            _ => Err(index_not_supported(left.kind())),
        }
    }

    /// Keys then values, in written order. Later duplicates win.
    fn eval_hash_literal(&self, literal: &HashLiteral, env: &Environment) -> EvalResult {
        let mut hash = HashObject::new();
        for (key_expr, value_expr) in &literal.pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_as_hash_key(key.kind()))?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, key, value);
        }
        Ok(Object::hash(hash))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
