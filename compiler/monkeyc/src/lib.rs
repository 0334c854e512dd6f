//! Monkey interpreter driver.
//!
//! Ties the pipeline together: source text is parsed with
//! [`monkey_parse::parse`] and, when it parsed cleanly, evaluated by a
//! [`monkey_eval::Interpreter`] against the [`Session`]'s root environment.
//! The `monkey` binary builds its REPL and file commands on top of this.

pub mod commands;
mod session;
mod tracing_setup;

pub use session::{Outcome, Session};
pub use tracing_setup::init_tracing;

/// Failures of the driver itself, as opposed to errors in Monkey code.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the REPL input or writing its output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
