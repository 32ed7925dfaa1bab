//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticGroup, ReportSummary};

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
///
/// Produces one array per report. The summary is not printed: consumers
/// can count the array entries themselves.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_optional_string(&mut self, key: &str, value: Option<&str>) -> io::Result<()> {
        match value {
            Some(v) => writeln!(self.writer, "    \"{key}\": \"{}\",", escape_json(v)),
            None => writeln!(self.writer, "    \"{key}\": null,"),
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.first = true;
        write!(self.writer, "[")
    }

    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if !self.first {
            write!(self.writer, ",")?;
        }
        self.first = false;

        // Build JSON manually (to avoid serde dependency)
        writeln!(self.writer, "\n  {{")?;
        writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            diagnostic.severity
        )?;
        self.write_optional_string("code", diagnostic.code.as_deref())?;
        self.write_optional_string(
            "group",
            diagnostic.group.as_ref().map(DiagnosticGroup::as_str),
        )?;

        match diagnostic.location {
            Some(ref loc) => {
                writeln!(
                    self.writer,
                    "    \"location\": {{ \"file\": \"{}\", \"line\": {}, \"column\": {} }},",
                    escape_json(&loc.file),
                    loc.line,
                    loc.column
                )?;
            }
            None => writeln!(self.writer, "    \"location\": null,")?,
        }

        writeln!(
            self.writer,
            "    \"description\": \"{}\"",
            escape_json(&diagnostic.description)
        )?;
        write!(self.writer, "  }}")
    }

    fn end(&mut self) -> io::Result<()> {
        if self.first {
            writeln!(self.writer, "]")
        } else {
            writeln!(self.writer, "\n]")
        }
    }

    fn emit_summary(&mut self, _summary: &ReportSummary) -> io::Result<()> {
        // JSON output doesn't need a summary - the data speaks for itself
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
