//! The synthesized explanation diagnostic.

use tally_diagnostic::{DiagnosticKind, Severity};

/// Emitted once, without a location, ahead of the first diagnostic about an
/// undeclared reference or an unresolved type. Recorded as a leading
/// diagnostic, so it opens the report.
pub const MISSING_TYPES_EXPLANATION: DiagnosticKind = DiagnosticKind::new(
    "MISSING_TYPES",
    Severity::Error,
    "Clutz could not resolve some required types; check that all transitive \
     dependencies/externs are provided",
);
