//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, ReportSummary, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Each diagnostic is one line:
///
/// ```text
/// lib/foo.js:10:2: error - [JSC_TYPE_PARSE_ERROR] Bad type annotation. Unknown type Foo
/// ```
///
/// followed, at the end of the report, by a summary such as
/// `2 errors, 1 warning` (plus `, 3 suppressed` when anything was dropped).
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create a terminal emitter without colors.
    pub fn plain(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::Never, false)
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    fn write_severity(&mut self, severity: Severity) -> io::Result<()> {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Info => colors::INFO,
        };
        self.write_colored(&severity.to_string(), color)
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if let Some(ref location) = diagnostic.location {
            self.write_colored(&location.to_string(), colors::BOLD)?;
            write!(self.writer, ": ")?;
        }
        self.write_severity(diagnostic.severity)?;
        write!(self.writer, " - ")?;
        if let Some(ref code) = diagnostic.code {
            write!(self.writer, "[{code}] ")?;
        }
        writeln!(self.writer, "{}", diagnostic.description)
    }

    fn emit_summary(&mut self, summary: &ReportSummary) -> io::Result<()> {
        let errors = summary.error_count;
        let warnings = summary.warning_count;

        if errors > 0 {
            self.write_colored(&format!("{errors} error{}", plural_s(errors)), colors::ERROR)?;
        } else {
            write!(self.writer, "0 errors")?;
        }
        write!(self.writer, ", ")?;
        if warnings > 0 {
            self.write_colored(
                &format!("{warnings} warning{}", plural_s(warnings)),
                colors::WARNING,
            )?;
        } else {
            write!(self.writer, "0 warnings")?;
        }
        if summary.suppressed_count > 0 {
            write!(self.writer, ", {} suppressed", summary.suppressed_count)?;
        }
        writeln!(self.writer)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
