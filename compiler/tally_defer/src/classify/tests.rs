use super::*;
use tally_diagnostic::Location;

fn error(description: &str) -> Diagnostic {
    Diagnostic::error(description)
}

#[test]
fn undefined_variable_group() {
    let diag = error("variable foo is undeclared").with_group(DiagnosticGroup::UndefinedVariables);
    assert_eq!(classify(&diag), Category::UndefinedReference);
}

#[test]
fn undefined_names_group() {
    let diag = error("name goog.bar is not defined").with_group(DiagnosticGroup::UndefinedNames);
    assert_eq!(classify(&diag), Category::UndefinedReference);
}

#[test]
fn other_group_falls_through_to_text() {
    let diag = error("unreachable code").with_group(DiagnosticGroup::from_tag("check useless code"));
    assert_eq!(classify(&diag), Category::Other);
}

#[test]
fn group_wins_over_text() {
    let diag = error("Bad type annotation. Unknown type Foo")
        .with_group(DiagnosticGroup::UndefinedNames);
    assert_eq!(classify(&diag), Category::UndefinedReference);
}

#[test]
fn each_single_trigger_phrase() {
    for text in [
        "Bad type annotation. Unknown type ns.Foo",
        "required \"a.b\" namespace never provided",
        "Property bar never defined on Foo",
        "property baz not defined on any superclass of Qux",
        "illegal initialization of @define variable DEBUG",
    ] {
        assert_eq!(classify(&error(text)), Category::MissingTypeInfo, "{text}");
    }
}

#[test]
fn required_namespace_needs_both_phrases() {
    assert_eq!(
        classify(&error("Required namespace \"a.b\" never defined.")),
        Category::MissingTypeInfo
    );
    assert_eq!(
        classify(&error("Required namespace \"a.b\" is misspelled")),
        Category::Other
    );
    assert_eq!(classify(&error("symbol never defined")), Category::Other);
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(
        classify(&error("bad type annotation. unknown type Foo")),
        Category::Other
    );
}

#[test]
fn classification_ignores_severity_and_location() {
    let text = "Bad type annotation. Unknown type Foo";
    let base = classify(&error(text));
    assert_eq!(classify(&Diagnostic::warning(text)), base);
    assert_eq!(
        classify(&Diagnostic::info(text).with_location(Location::new("a.js", 1, 1))),
        base
    );
}

#[test]
fn plain_messages_are_other() {
    assert_eq!(classify(&error("x unused")), Category::Other);
    assert_eq!(classify(&error("possible side effect")), Category::Other);
    assert_eq!(classify(&error("")), Category::Other);
}

#[test]
fn qualifying_categories() {
    assert!(Category::UndefinedReference.is_qualifying());
    assert!(Category::MissingTypeInfo.is_qualifying());
    assert!(!Category::Other.is_qualifying());
}
