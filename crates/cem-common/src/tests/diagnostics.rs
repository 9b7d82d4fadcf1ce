use super::*;

#[test]
fn query_error_defaults_to_error_category() {
    assert_eq!(
        DiagnosticKind::QueryError.default_category(),
        DiagnosticCategory::Error
    );
}

#[test]
fn ambiguous_css_comment_defaults_to_warning() {
    assert_eq!(
        DiagnosticKind::AmbiguousCssComment.default_category(),
        DiagnosticCategory::Warning
    );
}

#[test]
fn sink_reports_errors_presence() {
    let mut sink = DiagnosticSink::new();
    assert!(!sink.has_errors());
    sink.push(Diagnostic::new(
        DiagnosticKind::IoError,
        "a.ts",
        Span::at(0),
        "boom",
    ));
    assert!(sink.has_errors());
}
