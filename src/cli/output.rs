//! Handles all user-facing output for the CLI.
//!
//! Generated code and dumps go to stdout; warnings and errors go to stderr,
//! coloured when stderr is a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::codegen::SkippedStatement;
use crate::syntax::LineDiagnostic;

fn stderr() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stderr(choice)
}

fn print_labeled(label: &str, color: Color, message: &str) {
    let mut err = stderr();
    let _ = err.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(err, "{}", label);
    let _ = err.reset();
    let _ = writeln!(err, ": {}", message);
}

pub fn print_warning(message: &str) {
    print_labeled("warning", Color::Yellow, message);
}

/// Reports lines that were left out of a program, prefixed with `origin`.
pub fn print_line_diagnostics(origin: &str, diagnostics: &[LineDiagnostic]) {
    for diagnostic in diagnostics {
        print_warning(&format!(
            "{}:{}: could not parse '{}': {}",
            origin, diagnostic.line, diagnostic.text, diagnostic.message
        ));
    }
}

/// Reports statements that parsed but generated no code.
pub fn print_skipped(origin: &str, skipped: &[SkippedStatement]) {
    for statement in skipped {
        print_warning(&format!(
            "{}: statement {} produced no code: {}",
            origin,
            statement.index + 1,
            statement.reason
        ));
    }
}

/// Prints a one-line summary in green (clean) or yellow (problems found).
pub fn print_summary(files: usize, failures: usize) {
    let mut err = stderr();
    let color = if failures == 0 {
        Color::Green
    } else {
        Color::Yellow
    };
    let _ = err.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(
        err,
        "checked {} file(s), {} line(s) failed to parse",
        files, failures
    );
    let _ = err.reset();
}
