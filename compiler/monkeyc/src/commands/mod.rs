//! Command handlers for the `monkey` CLI.
//!
//! Handlers write to caller-supplied writers and return an exit status so
//! the binary stays a thin argument parser.

mod debug;
mod repl;
mod run;

pub use debug::{lex_source, parse_source};
pub use repl::{run_repl, PROMPT};
pub use run::run_source;

use monkey_ir::{LineOffsetTable, Span};

use crate::DriverError;

/// Read a source file, mapping the common failures to friendly messages.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DriverError::NotFound {
            path: path.to_string(),
        },
        std::io::ErrorKind::InvalidData => DriverError::InvalidUtf8 {
            path: path.to_string(),
        },
        _ => DriverError::Read {
            path: path.to_string(),
            source,
        },
    })
}

/// Format `span` as `<label>:<line>:<col>`.
fn location(label: &str, source: &str, table: &LineOffsetTable, span: Span) -> String {
    let (line, col) = table.offset_to_line_col(source, span.start);
    format!("{label}:{line}:{col}")
}
