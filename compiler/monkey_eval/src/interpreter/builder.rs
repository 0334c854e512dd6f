//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`]. Output goes to stdout unless a print
/// handler is given.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination for `puts`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
