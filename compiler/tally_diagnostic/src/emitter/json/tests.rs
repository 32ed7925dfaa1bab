use super::*;
use crate::Location;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error("variable foo is undeclared")
        .with_code("JSC_UNDEFINED_VARIABLE")
        .with_group(DiagnosticGroup::UndefinedVariables)
        .with_location(Location::new("src/\"odd\".js", 4, 9))
}

fn render(diags: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin().unwrap();
    emitter.emit_all(diags).unwrap();
    emitter.end().unwrap();
    emitter.flush().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_json_emitter() {
    let text = render(&[sample_diagnostic()]);
    assert!(text.starts_with('['));
    assert!(text.trim_end().ends_with(']'));
    assert!(text.contains("\"severity\": \"error\""));
    assert!(text.contains("\"code\": \"JSC_UNDEFINED_VARIABLE\""));
    assert!(text.contains("\"group\": \"undefined variables\""));
    assert!(text.contains("\"file\": \"src/\\\"odd\\\".js\", \"line\": 4, \"column\": 9"));
    assert!(text.contains("\"description\": \"variable foo is undeclared\""));
}

#[test]
fn test_json_emitter_locationless() {
    let text = render(&[Diagnostic::warning("global warning")]);
    assert!(text.contains("\"location\": null"));
    assert!(text.contains("\"code\": null"));
    assert!(text.contains("\"group\": null"));
}

#[test]
fn test_json_emitter_multiple() {
    let text = render(&[Diagnostic::error("error 1"), Diagnostic::warning("warning 1")]);
    assert_eq!(text.matches("\"description\"").count(), 2);
    assert_eq!(text.matches("},").count(), 1);
}

#[test]
fn test_json_emitter_empty() {
    assert_eq!(render(&[]), "[]\n");
}

#[test]
fn test_json_summary_writes_nothing() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.emit_summary(&ReportSummary::default()).unwrap();
    assert!(output.is_empty());
}
