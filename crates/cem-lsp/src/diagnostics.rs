//! Diagnostics (§6): runs the extractor's merge pipeline over an open
//! document for its own diagnostic channel (ambiguous CSS comments,
//! missing superclass modules, malformed JSDoc, parse/query errors),
//! then separately checks every custom-element usage in the document
//! against the registry for `unknown-element`/`unknown-attribute`.

use cem_alias::FsSourceLoader;
use cem_common::{Diagnostic as CemDiagnostic, DiagnosticCategory, DiagnosticKind, DiagnosticSink};
use cem_extract::FsStyleFileLoader;
use cem_query::{Grammar, QueryManager};
use cem_registry::Registry;
use tower_lsp_server::ls_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

use crate::document::Document;
use crate::levenshtein;
use crate::usage_scan;

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[must_use]
pub fn analyze(manager: &QueryManager, registry: &Registry, path: &str, document: &Document) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    if let Some(grammar) = document.grammar {
        if matches!(grammar, Grammar::TypeScript | Grammar::Tsx | Grammar::JavaScript) {
            let mut sink = DiagnosticSink::new();
            let module_file = std::path::Path::new(path);
            let module_dir = module_file.parent().unwrap_or_else(|| std::path::Path::new("."));
            let _module = cem_extract::build_module(
                manager,
                path,
                module_dir,
                module_file,
                grammar,
                &document.text,
                &FsStyleFileLoader,
                &FsSourceLoader,
                &mut sink,
            );
            for diag in sink.into_vec() {
                out.push(to_lsp(&diag, document));
            }
        }

        for usage in usage_scan::scan(manager, grammar, &document.text) {
            match registry.element_info(&usage.tag) {
                None => out.push(Diagnostic {
                    range: span_range(document, usage.start, usage.end),
                    severity: Some(DiagnosticSeverity::WARNING),
                    code: Some(NumberOrString::String("unknown-element".to_string())),
                    source: Some("cem".to_string()),
                    message: format!("unknown custom element <{}>", usage.tag),
                    ..Diagnostic::default()
                }),
                Some(_) => {
                    let known = registry.all_attributes_for(&usage.tag);
                    for attr in &usage.attributes {
                        let bare = attr.name.trim_start_matches(['@', '.', '?']);
                        if known.iter().any(|a| a.name == bare) {
                            continue;
                        }
                        let suggestion = levenshtein::closest(bare, known.iter().map(|a| a.name.as_str()), MAX_SUGGESTION_DISTANCE);
                        let message = match suggestion {
                            Some(s) => format!("unknown attribute {:?} on <{}> — did you mean {s:?}?", attr.name, usage.tag),
                            None => format!("unknown attribute {:?} on <{}>", attr.name, usage.tag),
                        };
                        out.push(Diagnostic {
                            range: span_range(document, attr.start, attr.end),
                            severity: Some(DiagnosticSeverity::WARNING),
                            code: Some(NumberOrString::String("unknown-attribute".to_string())),
                            source: Some("cem".to_string()),
                            message,
                            ..Diagnostic::default()
                        });
                    }
                }
            }
        }
    }

    out
}

fn span_range(document: &Document, start: u32, end: u32) -> Range {
    Range { start: to_position(document, start), end: to_position(document, end) }
}

fn to_position(document: &Document, offset: u32) -> Position {
    let p = document.offset_to_position(offset);
    Position { line: p.line, character: p.character }
}

fn to_lsp(diag: &CemDiagnostic, document: &Document) -> Diagnostic {
    let severity = match diag.category {
        DiagnosticCategory::Error => DiagnosticSeverity::ERROR,
        DiagnosticCategory::Warning => DiagnosticSeverity::WARNING,
    };
    let range = if diag.span.is_dummy() {
        Range { start: Position { line: 0, character: 0 }, end: Position { line: 0, character: 0 } }
    } else {
        span_range(document, diag.span.start, diag.span.end)
    };
    Diagnostic {
        range,
        severity: Some(severity),
        code: Some(NumberOrString::String(code_for(diag.kind).to_string())),
        source: Some("cem".to_string()),
        message: diag.message.clone(),
        ..Diagnostic::default()
    }
}

fn code_for(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::ParseError => "parse-error",
        DiagnosticKind::QueryError => "query-error",
        DiagnosticKind::ResolveError => "resolve-error",
        DiagnosticKind::JsdocError => "jsdoc-error",
        DiagnosticKind::AmbiguousCssComment => "ambiguous-css-comment",
        DiagnosticKind::DuplicateTagName => "duplicate-tag-name",
        DiagnosticKind::RemoteFetchError => "remote-fetch-error",
        DiagnosticKind::IoError => "io-error",
        DiagnosticKind::UnknownElement => "unknown-element",
        DiagnosticKind::UnknownAttribute => "unknown-attribute",
        DiagnosticKind::ImplementationDetailDocumented => "implementation-detail-documented",
        DiagnosticKind::MissingSuperclassModule => "missing-superclass-module",
    }
}

#[cfg(test)]
#[path = "tests/diagnostics.rs"]
mod tests;
