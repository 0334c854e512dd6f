//! The parse-then-evaluate pipeline.

use monkey_eval::{Environment, Interpreter, Object};
use monkey_parse::ParseError;
use tracing::debug;

/// Result of running one chunk of source through a [`Session`].
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The source did not parse. Nothing was evaluated.
    ParseErrors(Vec<ParseError>),
    /// The last statement produced a value. Runtime errors arrive here as
    /// `Object::Error`.
    Value(Object),
    /// The last statement produced no value (a `let`, or empty input).
    NoValue,
}

/// An interpreter paired with a root environment that persists across
/// calls to [`Session::eval_source`].
pub struct Session {
    interpreter: Interpreter,
    env: Environment,
}

impl Session {
    /// Session printing `puts` output to stdout.
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session {
            interpreter,
            env: Environment::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The root environment. Bindings made by earlier calls live here.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse `source` and, if it parsed without errors, evaluate it.
    pub fn eval_source(&mut self, source: &str) -> Outcome {
        let output = monkey_parse::parse(source);
        if output.has_errors() {
            debug!(count = output.errors.len(), "skipping evaluation");
            return Outcome::ParseErrors(output.errors);
        }
        match self.interpreter.eval_program(&output.program, &self.env) {
            Some(value) => Outcome::Value(value),
            None => Outcome::NoValue,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
