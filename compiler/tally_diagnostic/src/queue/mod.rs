//! Report queue for collecting, deduplicating, counting and sorting diagnostics.
//!
//! Features:
//! - Exact-duplicate removal
//! - Error limit to prevent overwhelming output
//! - Error, warning and suppressed tallies
//! - Leading diagnostics printed ahead of everything else
//! - Severity-then-location ordering with location-less diagnostics first

use std::cmp::{Ordering, Reverse};

use rustc_hash::FxHashSet;

use crate::{Diagnostic, ReportSummary};

/// Configuration for the report queue.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueueConfig {
    /// Maximum number of errors to keep (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics identical to one already recorded.
    pub deduplicate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl QueueConfig {
    /// Create a config with no limits and no deduplication (for testing).
    pub fn unlimited() -> Self {
        QueueConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }

    /// Set the error limit.
    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = ReportQueue::new();
/// queue.record(diagnostic);
/// // ... record more diagnostics
/// let summary = queue.summary();
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReportQueue {
    /// Diagnostics that open the report, in recording order. Never sorted.
    leading: Vec<Diagnostic>,
    /// Collected diagnostics, in recording order.
    diagnostics: Vec<Diagnostic>,
    /// Everything accepted so far, for duplicate detection.
    seen: FxHashSet<Diagnostic>,
    /// Count of accepted errors.
    error_count: usize,
    /// Count of accepted warnings.
    warning_count: usize,
    /// Count of diagnostics dropped as duplicates or over the limit.
    suppressed_count: usize,
    /// Configuration.
    config: QueueConfig,
}

impl ReportQueue {
    /// Create a new report queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create a report queue with custom configuration.
    pub fn with_config(config: QueueConfig) -> Self {
        ReportQueue {
            leading: Vec::new(),
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            error_count: 0,
            warning_count: 0,
            suppressed_count: 0,
            config,
        }
    }

    /// Record a diagnostic.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if it was dropped.
    pub fn record(&mut self, diag: Diagnostic) -> bool {
        if !self.accept(&diag) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Record a diagnostic that must open the report.
    ///
    /// Leading diagnostics are filtered and counted like any other, but
    /// `flush` returns them first, in recording order, ahead of the sorted
    /// rest.
    pub fn record_leading(&mut self, diag: Diagnostic) -> bool {
        if !self.accept(&diag) {
            return false;
        }
        self.leading.push(diag);
        true
    }

    /// Apply the limit and dedup filters and update the tallies.
    fn accept(&mut self, diag: &Diagnostic) -> bool {
        if diag.is_error() && self.limit_reached() {
            self.suppressed_count += 1;
            return false;
        }

        if self.config.deduplicate && !self.seen.insert(diag.clone()) {
            self.suppressed_count += 1;
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        } else if diag.is_warning() {
            self.warning_count += 1;
        }
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors kept.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the number of warnings kept.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Get the number of diagnostics dropped.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed_count
    }

    /// Number of diagnostics currently queued.
    pub fn len(&self) -> usize {
        self.leading.len() + self.diagnostics.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.diagnostics.is_empty()
    }

    /// Snapshot the tallies.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            error_count: self.error_count,
            warning_count: self.warning_count,
            suppressed_count: self.suppressed_count,
        }
    }

    /// Sort diagnostics and return them.
    ///
    /// Leading diagnostics come first. The rest are ordered errors, then
    /// warnings, then infos; within a severity location-less diagnostics
    /// come first, then by file, line, column and description. Clears the
    /// queue after flushing. Skips sorting if already in order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| report_order(&w[0], &w[1]) != Ordering::Greater);

        if !already_sorted {
            // Stable: full ties keep recording order.
            self.diagnostics.sort_by(report_order);
        }

        let mut result = std::mem::take(&mut self.leading);
        result.append(&mut self.diagnostics);

        // Reset state
        self.seen.clear();
        self.error_count = 0;
        self.warning_count = 0;
        self.suppressed_count = 0;

        result
    }

    /// Get diagnostics without clearing the queue: leading ones first,
    /// then the rest, each in recording order.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.leading.iter().chain(self.diagnostics.iter())
    }
}

/// Report ordering: severity descending, then location (absent first),
/// then description.
fn report_order(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    (Reverse(a.severity), &a.location, &a.description).cmp(&(
        Reverse(b.severity),
        &b.location,
        &b.description,
    ))
}
