//! The aggregator seam and its printing implementation.
//!
//! An [`Aggregator`] is whatever stores forwarded diagnostics and, when
//! asked, materializes the final report. [`PrintReporter`] is the stock
//! one: a [`ReportQueue`] for storage plus a [`DiagnosticEmitter`] for
//! output.

use std::io;

use thiserror::Error;

use crate::emitter::DiagnosticEmitter;
use crate::{Diagnostic, QueueConfig, ReportQueue};

/// Tallies of a rendered report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReportSummary {
    /// Errors that made it into the report.
    pub error_count: usize,
    /// Warnings that made it into the report.
    pub warning_count: usize,
    /// Diagnostics the aggregator dropped (duplicates, over the limit).
    pub suppressed_count: usize,
}

impl ReportSummary {
    /// Check if the report contains at least one error.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Failure while materializing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the report failed.
    #[error("failed to write diagnostic report: {0}")]
    Io(#[from] io::Error),
}

/// Stores diagnostics and renders the final report.
pub trait Aggregator {
    /// Store a diagnostic for the report.
    fn record(&mut self, diagnostic: Diagnostic);

    /// Store a diagnostic that must open the report, ahead of everything
    /// recorded with [`record`](Aggregator::record).
    ///
    /// Aggregators without a notion of report order may treat this as a
    /// plain `record`.
    fn record_leading(&mut self, diagnostic: Diagnostic) {
        self.record(diagnostic);
    }

    /// Sort, count and print everything recorded so far.
    fn render(&mut self) -> Result<ReportSummary, ReportError>;

    /// Number of errors recorded so far.
    fn error_count(&self) -> usize;

    /// Number of warnings recorded so far.
    fn warning_count(&self) -> usize;
}

/// Aggregator that prints the sorted report through an emitter.
pub struct PrintReporter<E: DiagnosticEmitter> {
    queue: ReportQueue,
    emitter: E,
}

impl<E: DiagnosticEmitter> PrintReporter<E> {
    /// Create a reporter with the default queue configuration.
    pub fn new(emitter: E) -> Self {
        Self::with_config(emitter, QueueConfig::default())
    }

    /// Create a reporter with a custom queue configuration.
    pub fn with_config(emitter: E, config: QueueConfig) -> Self {
        PrintReporter {
            queue: ReportQueue::with_config(config),
            emitter,
        }
    }

    /// The pending diagnostics.
    pub fn queue(&self) -> &ReportQueue {
        &self.queue
    }

    /// Consume the reporter and return the emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

impl<E: DiagnosticEmitter> Aggregator for PrintReporter<E> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.queue.record(diagnostic);
    }

    fn record_leading(&mut self, diagnostic: Diagnostic) {
        self.queue.record_leading(diagnostic);
    }

    fn render(&mut self) -> Result<ReportSummary, ReportError> {
        let summary = self.queue.summary();
        let diagnostics = self.queue.flush();

        self.emitter.begin()?;
        self.emitter.emit_all(&diagnostics)?;
        self.emitter.end()?;
        self.emitter.emit_summary(&summary)?;
        self.emitter.flush()?;

        Ok(summary)
    }

    fn error_count(&self) -> usize {
        self.queue.error_count()
    }

    fn warning_count(&self) -> usize {
        self.queue.warning_count()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
