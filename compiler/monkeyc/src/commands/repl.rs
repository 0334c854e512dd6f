//! The interactive read-eval-print loop.

use std::io::{BufRead, Write};

use crate::{DriverError, Outcome, Session};

pub const PROMPT: &str = ">> ";

/// Read lines from `input` until end of input, evaluating each in `session`.
///
/// Values are printed to `out` by their inspect rendering; statements with
/// no value print nothing. Parse errors are printed to `err`, one per line,
/// and the line is not evaluated. Bindings persist from line to line.
pub fn run_repl(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), DriverError> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match session.eval_source(&line) {
            Outcome::ParseErrors(errors) => {
                for error in &errors {
                    writeln!(err, "{error}")?;
                }
            }
            Outcome::Value(value) => writeln!(out, "{value}")?,
            Outcome::NoValue => {}
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
