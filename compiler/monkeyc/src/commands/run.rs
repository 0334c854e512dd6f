//! `monkey run`: evaluate a whole file.

use std::io::Write;

use monkey_ir::LineOffsetTable;

use super::location;
use crate::{DriverError, Outcome, Session};

/// Evaluate `source` in `session`.
///
/// Parse errors go to `err` as `<label>:<line>:<col>: <message>`. A runtime
/// error goes to `err` as its inspect rendering. A final value is not
/// printed; programs print with `puts`. Returns the process exit status.
pub fn run_source(
    session: &mut Session,
    label: &str,
    source: &str,
    err: &mut impl Write,
) -> Result<i32, DriverError> {
    match session.eval_source(source) {
        Outcome::ParseErrors(errors) => {
            let table = LineOffsetTable::build(source);
            for error in &errors {
                writeln!(err, "{}: {error}", location(label, source, &table, error.span()))?;
            }
            Ok(1)
        }
        Outcome::Value(value) if value.is_error() => {
            writeln!(err, "{value}")?;
            Ok(1)
        }
        Outcome::Value(_) | Outcome::NoValue => Ok(0),
    }
}
