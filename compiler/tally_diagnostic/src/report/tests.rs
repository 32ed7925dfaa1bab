use super::*;
use crate::emitter::{JsonEmitter, TerminalEmitter};
use crate::Location;
use pretty_assertions::assert_eq;
use std::io::Write;

fn located(description: &str, line: u32) -> Diagnostic {
    Diagnostic::error(description).with_location(Location::new("a.js", line, 1))
}

#[test]
fn render_prints_sorted_report_and_summary() {
    let mut reporter = PrintReporter::new(TerminalEmitter::plain(Vec::new()));
    reporter.record(located("late", 9));
    reporter.record(Diagnostic::warning("global"));
    reporter.record(located("early", 2));

    assert_eq!(reporter.error_count(), 2);
    assert_eq!(reporter.warning_count(), 1);

    let summary = reporter.render().unwrap();
    assert_eq!(
        summary,
        ReportSummary {
            error_count: 2,
            warning_count: 1,
            suppressed_count: 0,
        }
    );
    assert!(summary.has_errors());

    let text = String::from_utf8(reporter.into_emitter().into_inner()).unwrap();
    assert_eq!(
        text,
        "a.js:2:1: error - early\n\
         a.js:9:1: error - late\n\
         warning - global\n\
         2 errors, 1 warning\n"
    );
}

#[test]
fn render_prints_leading_diagnostic_first() {
    let mut reporter = PrintReporter::new(TerminalEmitter::plain(Vec::new()));
    reporter.record(Diagnostic::error("Zone config invalid"));
    reporter.record(located("early", 2));
    reporter.record_leading(Diagnostic::error("read this first").with_code("LEAD"));

    let _ = reporter.render().unwrap();
    let text = String::from_utf8(reporter.into_emitter().into_inner()).unwrap();
    assert_eq!(
        text,
        "error - [LEAD] read this first\n\
         error - Zone config invalid\n\
         a.js:2:1: error - early\n\
         3 errors, 0 warnings\n"
    );
}

#[test]
fn render_reports_suppressed_duplicates() {
    let mut reporter = PrintReporter::new(TerminalEmitter::plain(Vec::new()));
    reporter.record(located("same", 1));
    reporter.record(located("same", 1));

    let summary = reporter.render().unwrap();
    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.suppressed_count, 1);
}

#[test]
fn render_empties_the_queue() {
    let mut reporter = PrintReporter::new(TerminalEmitter::plain(Vec::new()));
    reporter.record(located("only", 1));
    let _ = reporter.render().unwrap();

    assert!(reporter.queue().is_empty());
    assert_eq!(reporter.error_count(), 0);
}

#[test]
fn render_json() {
    let mut reporter = PrintReporter::new(JsonEmitter::new(Vec::new()));
    reporter.record(Diagnostic::info("note"));

    let summary = reporter.render().unwrap();
    assert!(!summary.has_errors());

    let text = String::from_utf8(reporter.into_emitter().into_inner()).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains("\"severity\": \"info\""));
}

#[test]
fn render_propagates_io_errors() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut reporter = PrintReporter::new(TerminalEmitter::plain(Broken));
    reporter.record(located("boom", 1));

    let err = reporter.render().unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
    assert!(err.to_string().contains("disk full"));
}
