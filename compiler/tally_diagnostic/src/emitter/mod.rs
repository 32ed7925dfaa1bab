//! Diagnostic Emitters
//!
//! Provides different output formats for a rendered report:
//! - Terminal: Colored, human-readable output
//! - JSON: Machine-readable output for tooling
//!
//! Each emitter implements the `DiagnosticEmitter` trait. Write failures
//! are returned, not swallowed, so they reach whoever asked for the report.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write as _;
use std::io;

use crate::{Diagnostic, ReportSummary};

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Start of a report. Called once before the first diagnostic.
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(diag)?;
        }
        Ok(())
    }

    /// End of a report. Called once after the last diagnostic.
    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, summary: &ReportSummary) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("hello"), "hello");
        assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
        assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_json("path\\file"), "path\\\\file");
        assert_eq!(escape_json("bell\u{7}"), "bell\\u0007");
    }
}
