use std::io::Write;

use walk::WalkError;

use crate::parser::CliError;
use crate::USAGE;

/// Renders diagnostics with the program-name prefix shared by every message.
///
/// The program name is threaded through as explicit context rather than held
/// in process-global state; one reporter serves both the per-entry
/// diagnostics emitted during the walk and the fatal argument diagnostics
/// emitted before it.
pub struct Reporter<'a, W: Write> {
    program: &'a str,
    stderr: &'a mut W,
}

impl<'a, W: Write> Reporter<'a, W> {
    /// Creates a reporter for `program` writing to `stderr`.
    pub fn new(program: &'a str, stderr: &'a mut W) -> Self {
        Self { program, stderr }
    }

    /// Reports a per-entry traversal failure; the walk continues.
    pub fn recoverable(&mut self, error: &WalkError) {
        let _ = writeln!(
            self.stderr,
            "{}: `{}': {}",
            self.program,
            error.path(),
            error.io_error()
        );
    }

    /// Reports a fatal argument failure.
    ///
    /// Bare syntax failures show only the usage text; the ordering violation
    /// shows its own diagnostic followed by the usage text; every other
    /// variant is a single prefixed line.
    pub fn fatal(&mut self, error: &CliError) {
        match error {
            CliError::Syntax => {
                let _ = writeln!(self.stderr, "{USAGE}");
            }
            CliError::PathAfterOptions(_) => {
                let _ = writeln!(self.stderr, "{}: {error}", self.program);
                let _ = writeln!(self.stderr, "{USAGE}");
            }
            _ => {
                let _ = writeln!(self.stderr, "{}: {error}", self.program);
            }
        }
    }
}
