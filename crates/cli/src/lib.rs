#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for `pfind`. The crate
//! recognises the full surface of the tool — a start path followed by at
//! most one `-name` and one `-type` predicate — and drives the traversal in
//! [`walk`] with the criteria compiled by [`filters`], printing one matching
//! path per line.
//!
//! # Design
//!
//! [`run`] is the primary entry point. It accepts an iterator of arguments
//! together with handles for standard output and error, so the complete
//! surface can be exercised in-process against in-memory writers; the
//! `pfind` binary is a thin shim around it. Argument interpretation is a
//! hand-written left-to-right scan ([`parse_invocation`]): the grammar puts
//! the start path before any predicate, uses single-dash multi-character
//! option names, and consumes option values blindly, all of which rule out a
//! declarative option parser.
//!
//! # Invariants
//!
//! - `run` never panics; diagnostics surface on the injected stderr handle
//!   and as the returned exit status.
//! - Every fatal diagnostic is emitted before the walk starts. Once
//!   traversal begins the only possible outcome is exit status 0.
//! - Per-entry failures are reported through the [`Reporter`] and never
//!   interrupt the remaining walk.
//!
//! # Errors
//!
//! Argument failures are modelled by [`CliError`]; [`run`] renders them and
//! returns exit status 1. Traversal failures are recoverable by contract and
//! only produce stderr lines.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["pfind", ".", "-name", "."], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b".\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use walk::Walker;

mod parser;
mod report;

pub use parser::{CliError, ParsedInvocation, parse_invocation};
pub use report::Reporter;

/// Name the tool reports itself as when the argument vector is empty.
pub const PROGRAM_NAME: &str = "pfind";

/// Usage text shown for syntax and ordering failures.
pub const USAGE: &str =
    "usage: pfind starting_path [-name filename-or-pattern] [-type {f|d|b|c|p|l|s}]";

/// Runs the tool with the provided argument vector and output handles.
///
/// The first argument is the program name used to prefix diagnostics.
/// Returns the process exit status: 0 for a completed walk (even when
/// individual entries failed), 1 for any argument failure.
pub fn run<Args, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator,
    Args::Item: Into<OsString>,
    Out: Write,
    ErrOut: Write,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args
        .next()
        .map_or_else(|| PROGRAM_NAME.to_string(), |arg| lossy_token(&arg));
    let tokens: Vec<String> = args.map(|arg| lossy_token(&arg)).collect();

    let mut reporter = Reporter::new(&program, stderr);
    match parse_invocation(&tokens) {
        Ok(parsed) => {
            search(&parsed, &mut reporter, stdout);
            0
        }
        Err(error) => {
            reporter.fatal(&error);
            1
        }
    }
}

/// Converts a numeric exit status into a [`process::ExitCode`](ExitCode).
#[must_use]
pub fn exit_code_from(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn lossy_token(arg: &OsString) -> String {
    arg.to_string_lossy().into_owned()
}

/// Drives the walk, printing matches and reporting per-entry failures.
fn search<Out, ErrOut>(
    parsed: &ParsedInvocation,
    reporter: &mut Reporter<'_, ErrOut>,
    stdout: &mut Out,
) where
    Out: Write,
    ErrOut: Write,
{
    for item in Walker::new(parsed.start_path.as_str()) {
        match item {
            Ok(entry) => {
                if parsed
                    .criteria
                    .matches(entry.parent(), entry.name(), entry.file_type())
                {
                    let _ = writeln!(stdout, "{}", entry.path());
                }
            }
            Err(error) => reporter.recoverable(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;

    struct Outcome {
        code: i32,
        stdout: String,
        stderr: String,
    }

    fn run_tool(args: &[&str]) -> Outcome {
        let mut argv = vec![PROGRAM_NAME];
        argv.extend_from_slice(args);
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run(argv, &mut stdout, &mut stderr);
        Outcome {
            code,
            stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
            stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
        }
    }

    fn stdout_set(outcome: &Outcome) -> BTreeSet<String> {
        outcome.stdout.lines().map(ToString::to_string).collect()
    }

    fn fixture_tree(temp: &tempfile::TempDir) -> String {
        let root = temp.path().join("root");
        fs::create_dir_all(root.join("sub")).expect("create tree");
        fs::write(root.join("top.txt"), b"data").expect("write top");
        fs::write(root.join("sub").join("inner.txt"), b"data").expect("write inner");
        root.display().to_string()
    }

    fn joined(root: &str, tail: &str) -> String {
        Path::new(root).join(tail).display().to_string()
    }

    #[test]
    fn no_arguments_fails_with_usage() {
        let outcome = run_tool(&[]);
        assert_eq!(outcome.code, 1);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.starts_with("usage: pfind"));
    }

    #[test]
    fn walks_a_tree_and_prints_every_real_entry() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = fixture_tree(&temp);

        let outcome = run_tool(&[&root]);
        assert_eq!(outcome.code, 0);
        assert!(outcome.stderr.is_empty());

        let expected: BTreeSet<String> = [
            joined(&root, "sub"),
            joined(&root, "sub/inner.txt"),
            joined(&root, "top.txt"),
        ]
        .into();
        assert_eq!(stdout_set(&outcome), expected);
    }

    #[test]
    fn name_filter_limits_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = fixture_tree(&temp);

        let outcome = run_tool(&[&root, "-name", "*.txt"]);
        assert_eq!(outcome.code, 0);

        let expected: BTreeSet<String> =
            [joined(&root, "sub/inner.txt"), joined(&root, "top.txt")].into();
        assert_eq!(stdout_set(&outcome), expected);
    }

    #[test]
    fn type_filter_limits_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = fixture_tree(&temp);

        let outcome = run_tool(&[&root, "-type", "d"]);
        assert_eq!(outcome.code, 0);

        let expected: BTreeSet<String> = [joined(&root, "sub")].into();
        assert_eq!(stdout_set(&outcome), expected);
    }

    #[test]
    fn dot_start_path_reports_itself() {
        let outcome = run_tool(&[".", "-name", "."]);
        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.stdout, ".\n");
    }

    #[test]
    fn start_file_is_matched_by_its_full_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("notes.txt");
        fs::write(&file, b"data").expect("write file");
        let start = file.display().to_string();

        let outcome = run_tool(&[&start]);
        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.stdout, format!("{start}\n"));

        let outcome = run_tool(&[&start, "-name", "*.txt"]);
        assert_eq!(outcome.stdout, format!("{start}\n"));

        let outcome = run_tool(&[&start, "-name", "*.md"]);
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn missing_start_path_is_recoverable() {
        let outcome = run_tool(&["/nonexistent/path/for/cli"]);
        assert_eq!(outcome.code, 0);
        assert!(outcome.stdout.is_empty());
        assert!(
            outcome
                .stderr
                .starts_with("pfind: `/nonexistent/path/for/cli': ")
        );
    }

    #[test]
    fn ordering_violation_is_fatal() {
        let outcome = run_tool(&["-name", "foo", "."]);
        assert_eq!(outcome.code, 1);
        assert!(outcome.stdout.is_empty());
        assert!(
            outcome
                .stderr
                .contains("paths must precede expression: .")
        );
        assert!(outcome.stderr.contains("usage: pfind"));
    }

    #[test]
    fn unknown_type_is_fatal() {
        let outcome = run_tool(&[".", "-type", "q"]);
        assert_eq!(outcome.code, 1);
        assert_eq!(outcome.stderr, "pfind: Unknown argument to -type: q\n");
    }

    #[test]
    fn exit_code_from_maps_statuses() {
        assert_eq!(exit_code_from(0), ExitCode::SUCCESS);
        assert_eq!(exit_code_from(1), ExitCode::from(1));
        assert_eq!(exit_code_from(-1), ExitCode::FAILURE);
    }
}
