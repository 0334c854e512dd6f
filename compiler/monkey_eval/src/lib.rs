//! Tree-walking evaluator for Monkey.
//!
//! # Architecture
//!
//! - [`Object`]: runtime values, including the internal return signal and
//!   error values
//! - [`Environment`]: reference-counted scope chain captured by closures
//! - [`Interpreter`]: reduces AST nodes to objects, writing `puts` output
//!   through a configurable print handler
//!
//! Runtime errors are ordinary [`Object::Error`] values. Internally they
//! travel on the `Err` side of [`EvalResult`] together with return signals,
//! so `?` short-circuits both out of nested blocks.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod object;
mod operators;
mod print_handler;
mod unary_operators;

pub use builtins::Builtin;
pub use environment::Environment;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use object::{FunctionObject, HashKey, HashObject, HashPair, Object, ObjectKind};
pub use operators::evaluate_infix;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_prefix;

/// Internal evaluation result.
///
/// `Err` carries either an [`Object::Error`] or an [`Object::ReturnValue`]
/// signal; both stop evaluation of the enclosing statement list.
pub type EvalResult = Result<Object, Object>;

#[cfg(test)]
mod tests;
