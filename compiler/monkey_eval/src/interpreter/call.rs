//! Function application.

use std::rc::Rc;

use tracing::trace;

use super::Interpreter;
use crate::errors::{not_a_function, wrong_argument_count};
use crate::{Environment, EvalResult, FunctionObject, Object};

impl Interpreter {
    /// Apply an evaluated callee to evaluated arguments.
    pub(super) fn apply_function(&self, function: &Object, args: Vec<Object>) -> EvalResult {
        match function {
            Object::Function(func) => self.call_user_function(func, args),
            Object::Builtin(builtin) => {
                trace!(builtin = builtin.name(), args = args.len(), "call builtin");
                match builtin.call(&args, &self.print_handler) {
                    error @ Object::Error(_) => Err(error),
                    value => Ok(value),
                }
            }
            other => Err(not_a_function(other.kind())),
        }
    }

    /// Bind arguments in a fresh scope enclosing the captured environment,
    /// then run the body. One return signal is unwrapped here.
    #[tracing::instrument(level = "debug", skip_all, fields(params = func.parameters().len()))]
    fn call_user_function(&self, func: &FunctionObject, args: Vec<Object>) -> EvalResult {
        let params = func.parameters();
        if params.len() != args.len() {
            return Err(wrong_argument_count(params.len(), args.len()));
        }

        let env = Environment::enclosed(func.env());
        for (param, arg) in params.iter().zip(args) {
            env.set(param.name.clone(), arg);
        }

        let result = match self.eval_block(func.body(), &env) {
            Ok(value) => Ok(value.unwrap_or(Object::NULL)),
            Err(Object::ReturnValue(value)) => Ok(Rc::unwrap_or_clone(value)),
            Err(error) => Err(error),
        };
        release_call_scope(&env, &result);
        result
    }
}

/// Clear a finished call's bindings when nothing outside can reach them.
///
/// The result is the only way out of a call scope, so if it holds no path
/// back, any remaining handles come from values bound inside the scope
/// itself (closures kept in arrays or hashes, or in nested call scopes).
fn release_call_scope(env: &Environment, result: &EvalResult) {
    if env.is_unshared() {
        return;
    }
    if let Ok(value) = result {
        if env.is_reachable_from(value) {
            return;
        }
    }
    trace!("clearing unreachable call scope");
    env.clear();
}
