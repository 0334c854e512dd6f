//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;

use monkey_ir::{LineOffsetTable, Node};

use super::location;
use crate::DriverError;

/// Print every token of `source`, one per line.
pub fn lex_source(label: &str, source: &str, out: &mut impl Write) -> Result<(), DriverError> {
    let tokens = monkey_lexer::lex(source);
    writeln!(out, "Tokens for '{label}' ({} tokens):", tokens.len())?;
    for token in &tokens {
        writeln!(out, "  {token:?}")?;
    }
    Ok(())
}

/// Print the canonical rendering of each statement, or the parse errors.
///
/// Returns the exit status: 1 when parsing failed.
pub fn parse_source(label: &str, source: &str, out: &mut impl Write) -> Result<i32, DriverError> {
    let output = monkey_parse::parse(source);

    if output.has_errors() {
        let table = LineOffsetTable::build(source);
        writeln!(out, "Errors in '{label}':")?;
        for error in &output.errors {
            writeln!(
                out,
                "  {}: {error}",
                location(label, source, &table, error.span())
            )?;
        }
        return Ok(1);
    }

    writeln!(
        out,
        "Parse result for '{label}' ({} statements):",
        output.program.statements.len()
    )?;
    for statement in &output.program.statements {
        writeln!(out, "  {}", Node::from(statement))?;
    }
    Ok(0)
}
