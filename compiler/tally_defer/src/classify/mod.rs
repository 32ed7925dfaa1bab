//! Heuristic classification of incoming diagnostics.
//!
//! The upstream engine has no structured "this type could not be resolved"
//! flag, so the classification keys off group tags and message text. The
//! trigger phrases below are the contract with the engine's messages and
//! must match them byte for byte.

use tally_diagnostic::{Diagnostic, DiagnosticGroup};

/// Semantic class of a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reference to an undeclared variable or name.
    UndefinedReference,
    /// A type, namespace or property whose declaration was never seen.
    MissingTypeInfo,
    /// Everything else.
    Other,
}

impl Category {
    /// Check if the category points at missing declarations.
    ///
    /// Qualifying diagnostics are usually symptoms of absent externs or
    /// dependencies rather than genuine errors in the analysed code.
    pub fn is_qualifying(self) -> bool {
        matches!(
            self,
            Category::UndefinedReference | Category::MissingTypeInfo
        )
    }
}

/// Phrases that on their own mark a missing-declaration message.
const MISSING_TYPE_PHRASES: &[&str] = &[
    "Bad type annotation. Unknown type",
    "namespace never provided",
    "never defined on",
    "not defined on any superclass",
    "illegal initialization of @define",
];

/// Phrases that mark a missing-declaration message only when all present.
const MISSING_NAMESPACE_PHRASES: &[&str] = &["Required namespace", "never defined"];

/// Classify a diagnostic.
///
/// Pure: the result depends only on the diagnostic's group tag and
/// description.
pub fn classify(diagnostic: &Diagnostic) -> Category {
    if diagnostic
        .group
        .as_ref()
        .is_some_and(DiagnosticGroup::is_undefined_reference)
    {
        return Category::UndefinedReference;
    }

    if is_missing_type_message(&diagnostic.description) {
        return Category::MissingTypeInfo;
    }

    Category::Other
}

fn is_missing_type_message(description: &str) -> bool {
    MISSING_TYPE_PHRASES
        .iter()
        .any(|phrase| description.contains(phrase))
        || MISSING_NAMESPACE_PHRASES
            .iter()
            .all(|phrase| description.contains(phrase))
}

#[cfg(test)]
mod tests;
