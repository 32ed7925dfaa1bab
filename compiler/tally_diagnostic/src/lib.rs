//! Diagnostic model and report aggregation.
//!
//! Everything a deferred error manager needs from the reporting side:
//! - [`Diagnostic`] values with severity, upstream code, description,
//!   optional [`Location`] and optional [`DiagnosticGroup`] tag
//! - [`ReportQueue`] to collect, deduplicate, count and sort them
//! - [`emitter`]s that print a sorted report (terminal or JSON)
//! - the [`Aggregator`] seam, with [`PrintReporter`] as the printing
//!   implementation
//!
//! # Ordering
//!
//! Diagnostics recorded with [`Aggregator::record_leading`] open the report
//! in recording order. The rest follow, errors first, then warnings, then
//! infos; within a severity location-less diagnostics come first, then by
//! file, line, column and description.
//!
//! ```text
//! let mut reporter = PrintReporter::new(TerminalEmitter::stderr(ColorMode::Auto, true));
//! reporter.record(Diagnostic::error("something went wrong"));
//! let summary = reporter.render()?;
//! ```

mod diagnostic;
pub mod emitter;
mod location;
pub mod queue;
pub mod report;

pub use diagnostic::{Diagnostic, DiagnosticGroup, DiagnosticKind, Severity};
pub use location::Location;
pub use queue::{QueueConfig, ReportQueue};
pub use report::{Aggregator, PrintReporter, ReportError, ReportSummary};
