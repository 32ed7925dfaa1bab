//! Core diagnostic types.
//!
//! Defines [`Diagnostic`], [`Severity`], [`DiagnosticGroup`] and
//! [`DiagnosticKind`], the values the analysis engine hands over and the
//! report queue stores.

use std::fmt;

use crate::Location;

/// Severity level for diagnostics.
///
/// Ordered from least to most severe.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Check if this is an error level.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Upstream diagnostic group a diagnostic belongs to.
///
/// The analysis engine tags diagnostics with the group that produced them.
/// Only the undefined-reference groups carry meaning for filtering; every
/// other tag is kept verbatim.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticGroup {
    /// References to variables that were never declared.
    UndefinedVariables,
    /// References to names that were never declared.
    UndefinedNames,
    /// Any other upstream group, by tag.
    Other(String),
}

impl DiagnosticGroup {
    /// Tag text for the undefined-variables group.
    pub const UNDEFINED_VARIABLES: &'static str = "undefined variables";
    /// Tag text for the undefined-names group.
    pub const UNDEFINED_NAMES: &'static str = "undefined names";

    /// Map an upstream tag to a group.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::UNDEFINED_VARIABLES => DiagnosticGroup::UndefinedVariables,
            Self::UNDEFINED_NAMES => DiagnosticGroup::UndefinedNames,
            other => DiagnosticGroup::Other(other.to_string()),
        }
    }

    /// The upstream tag text.
    pub fn as_str(&self) -> &str {
        match self {
            DiagnosticGroup::UndefinedVariables => Self::UNDEFINED_VARIABLES,
            DiagnosticGroup::UndefinedNames => Self::UNDEFINED_NAMES,
            DiagnosticGroup::Other(tag) => tag.as_str(),
        }
    }

    /// Check if this group reports references to undeclared symbols.
    pub fn is_undefined_reference(&self) -> bool {
        matches!(
            self,
            DiagnosticGroup::UndefinedVariables | DiagnosticGroup::UndefinedNames
        )
    }
}

impl fmt::Display for DiagnosticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static, named diagnostic descriptor.
///
/// Declared as a `const` by whoever owns the message; materialized into a
/// location-less [`Diagnostic`] with [`Diagnostic::from_kind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticKind {
    /// Stable key, e.g. `MISSING_TYPES`.
    pub code: &'static str,
    /// Default severity.
    pub severity: Severity,
    /// Fixed description text.
    pub description: &'static str,
}

impl DiagnosticKind {
    /// Declare a diagnostic kind.
    pub const fn new(code: &'static str, severity: Severity, description: &'static str) -> Self {
        DiagnosticKind {
            code,
            severity,
            description,
        }
    }
}

/// A single reported issue.
///
/// Diagnostics are values: the builders consume and return `self`, and
/// nothing in the reporting pipeline mutates a diagnostic once built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Upstream diagnostic key, if the engine supplied one.
    pub code: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Where the issue was found. `None` for file-independent diagnostics.
    pub location: Option<Location>,
    /// Upstream group tag.
    pub group: Option<DiagnosticGroup>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity.
    pub fn new(severity: Severity, description: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            code: None,
            description: description.into(),
            location: None,
            group: None,
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(description: impl Into<String>) -> Self {
        Self::new(Severity::Error, description)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, description)
    }

    /// Create a new informational diagnostic.
    pub fn info(description: impl Into<String>) -> Self {
        Self::new(Severity::Info, description)
    }

    /// Materialize a static descriptor. The result has no location.
    pub fn from_kind(kind: &DiagnosticKind) -> Self {
        Self::new(kind.severity, kind.description).with_code(kind.code)
    }

    /// Set the upstream diagnostic key.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Tag with an upstream diagnostic group.
    pub fn with_group(mut self, group: DiagnosticGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Re-level the diagnostic.
    ///
    /// The engine may report a diagnostic at a level other than its
    /// default (e.g. a warning promoted to an error by configuration).
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Check if this is an error (vs warning/info).
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref location) = self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} - ", self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(&self.description)
    }
}
