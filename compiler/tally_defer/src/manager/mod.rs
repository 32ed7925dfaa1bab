//! Deferred error manager.
//!
//! Sits between the analysis engine and an [`Aggregator`]:
//! - drops warnings unless running in debug mode
//! - drops or keeps diagnostics about missing declarations, depending on
//!   configuration
//! - when keeping them, injects a single location-less explanation ahead of
//!   the first one
//! - renders the report only on an explicit [`finalize`], never when an
//!   analysis phase reports that it is done
//!
//! [`finalize`]: DeferredErrorManager::finalize

use rustc_hash::FxHashMap;
use tally_diagnostic::{Aggregator, Diagnostic, DiagnosticKind, ReportSummary, Severity};

use crate::classify::classify;
use crate::{FinalizeError, MISSING_TYPES_EXPLANATION};

/// Policy switches, fixed when the manager is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManagerConfig {
    /// Let warnings through.
    pub debug: bool,
    /// Keep diagnostics about undeclared references and unresolved types.
    pub report_missing_types: bool,
    /// Diagnostic injected ahead of the first kept missing-declaration
    /// diagnostic.
    pub explanation: DiagnosticKind,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            debug: false,
            report_missing_types: false,
            explanation: MISSING_TYPES_EXPLANATION,
        }
    }
}

impl ManagerConfig {
    /// Create a config with the default explanation.
    pub fn new(debug: bool, report_missing_types: bool) -> Self {
        ManagerConfig {
            debug,
            report_missing_types,
            ..Self::default()
        }
    }

    /// Replace the explanation diagnostic.
    #[must_use]
    pub fn with_explanation(mut self, explanation: DiagnosticKind) -> Self {
        self.explanation = explanation;
        self
    }
}

/// Why a diagnostic was dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SuppressReason {
    /// A warning arrived while not in debug mode.
    WarningOutsideDebug,
    /// A missing-declaration diagnostic arrived while those are not reported.
    MissingTypesNotReported,
    /// The diagnostic arrived after the report was finalized.
    AfterFinalize,
}

/// What `intake` did with a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Dropped; nothing reached the aggregator.
    Suppressed(SuppressReason),
    /// Passed to the aggregator unchanged.
    Forwarded,
    /// The explanation was synthesized and passed on, then the diagnostic.
    ForwardedWithExplanation,
}

impl Disposition {
    /// Number of diagnostics this outcome handed to the aggregator.
    pub fn forwarded_count(self) -> usize {
        match self {
            Disposition::Suppressed(_) => 0,
            Disposition::Forwarded => 1,
            Disposition::ForwardedWithExplanation => 2,
        }
    }

    /// Check if the diagnostic was dropped.
    pub fn is_suppressed(self) -> bool {
        matches!(self, Disposition::Suppressed(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Collecting,
    Finalized,
}

/// Filters diagnostics into an aggregator and renders it once, on request.
///
/// # Example
///
/// ```text
/// let mut manager = DeferredErrorManager::new(reporter, ManagerConfig::new(false, true));
/// for (severity, diag) in engine_diagnostics {
///     manager.intake(severity, diag);
/// }
/// manager.end_phase("analysis");
/// // ... second phase ...
/// manager.end_phase("declarations");
/// let summary = manager.finalize()?;
/// ```
pub struct DeferredErrorManager<A: Aggregator> {
    aggregator: A,
    config: ManagerConfig,
    /// Set once, when the explanation is forwarded. Never reset.
    has_emitted_explanation: bool,
    lifecycle: Lifecycle,
    /// Per-reason tallies of dropped diagnostics.
    suppressed: FxHashMap<SuppressReason, usize>,
    phases_completed: usize,
}

impl<A: Aggregator> DeferredErrorManager<A> {
    /// Wrap an aggregator.
    pub fn new(aggregator: A, config: ManagerConfig) -> Self {
        tracing::debug!(
            debug = config.debug,
            report_missing_types = config.report_missing_types,
            "deferred error manager created"
        );
        DeferredErrorManager {
            aggregator,
            config,
            has_emitted_explanation: false,
            lifecycle: Lifecycle::Collecting,
            suppressed: FxHashMap::default(),
            phases_completed: 0,
        }
    }

    /// Take a diagnostic reported by the engine at `severity`.
    ///
    /// `severity` overrides the diagnostic's own level; the engine decides
    /// the effective level of each report.
    pub fn intake(&mut self, severity: Severity, diagnostic: Diagnostic) -> Disposition {
        if self.lifecycle == Lifecycle::Finalized {
            tracing::warn!(
                description = %diagnostic.description,
                "diagnostic reported after finalize; dropped"
            );
            return self.suppress(SuppressReason::AfterFinalize);
        }

        if severity == Severity::Warning && !self.config.debug {
            tracing::trace!(description = %diagnostic.description, "warning dropped");
            return self.suppress(SuppressReason::WarningOutsideDebug);
        }

        let category = classify(&diagnostic);
        let mut disposition = Disposition::Forwarded;

        if category.is_qualifying() {
            if !self.config.report_missing_types {
                tracing::debug!(
                    ?category,
                    description = %diagnostic.description,
                    "missing-declaration diagnostic dropped"
                );
                return self.suppress(SuppressReason::MissingTypesNotReported);
            }

            if !self.has_emitted_explanation {
                self.has_emitted_explanation = true;
                // Opens the report, ahead of the diagnostics it explains.
                let explanation = Diagnostic::from_kind(&self.config.explanation)
                    .with_severity(Severity::Error);
                tracing::debug!(
                    code = self.config.explanation.code,
                    "missing-types explanation synthesized"
                );
                self.aggregator.record_leading(explanation);
                disposition = Disposition::ForwardedWithExplanation;
            }
        }

        tracing::trace!(
            %severity,
            ?category,
            description = %diagnostic.description,
            "forwarded"
        );
        self.aggregator.record(diagnostic.with_severity(severity));
        disposition
    }

    /// An analysis phase reports it is done.
    ///
    /// Only counted. The report is rendered by [`finalize`](Self::finalize)
    /// alone, after every phase has finished.
    pub fn end_phase(&mut self, phase: &str) {
        self.phases_completed += 1;
        tracing::debug!(
            phase,
            completed = self.phases_completed,
            errors = self.aggregator.error_count(),
            warnings = self.aggregator.warning_count(),
            "analysis phase complete; report deferred"
        );
    }

    /// Render the report.
    ///
    /// Succeeds at most once. Aggregator failures are returned as they are,
    /// and the manager counts as finalized either way.
    pub fn finalize(&mut self) -> Result<ReportSummary, FinalizeError> {
        if self.lifecycle == Lifecycle::Finalized {
            tracing::warn!("finalize called more than once");
            return Err(FinalizeError::AlreadyFinalized);
        }
        self.lifecycle = Lifecycle::Finalized;

        tracing::debug!(
            phases = self.phases_completed,
            suppressed = self.suppressed_total(),
            "rendering diagnostic report"
        );
        let summary = self.aggregator.render()?;
        Ok(summary)
    }

    /// Check if the report has been rendered.
    pub fn is_finalized(&self) -> bool {
        self.lifecycle == Lifecycle::Finalized
    }

    /// Check if the explanation has been forwarded.
    pub fn has_emitted_explanation(&self) -> bool {
        self.has_emitted_explanation
    }

    /// The policy this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Number of diagnostics dropped for `reason`.
    ///
    /// Diagnostic counters only: they never feed back into filtering, and
    /// policy drops never reach the aggregator, so they are absent from the
    /// rendered [`ReportSummary`](tally_diagnostic::ReportSummary).
    pub fn suppressed(&self, reason: SuppressReason) -> usize {
        self.suppressed.get(&reason).copied().unwrap_or(0)
    }

    /// Number of diagnostics dropped for any reason.
    ///
    /// Like [`suppressed`](Self::suppressed), not part of the report.
    pub fn suppressed_total(&self) -> usize {
        self.suppressed.values().sum()
    }

    /// Number of `end_phase` signals received.
    pub fn phases_completed(&self) -> usize {
        self.phases_completed
    }

    /// The wrapped aggregator.
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Unwrap the aggregator.
    pub fn into_aggregator(self) -> A {
        self.aggregator
    }

    fn suppress(&mut self, reason: SuppressReason) -> Disposition {
        *self.suppressed.entry(reason).or_insert(0) += 1;
        Disposition::Suppressed(reason)
    }
}
