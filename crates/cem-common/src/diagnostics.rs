//! Diagnostics: the non-fatal error channel used by every extractor stage.
//!
//! Extractors never panic on malformed input (§7): they accumulate
//! `Diagnostic`s and keep going. The CLI renders them to stderr; the LSP
//! turns them into `publishDiagnostics` notifications or log messages.

use serde::{Deserialize, Serialize};

use crate::span::Span;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// The error taxonomy from the design's error-handling section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("parse error")]
    ParseError,
    #[error("query error")]
    QueryError,
    #[error("could not resolve import or type alias")]
    ResolveError,
    #[error("malformed jsdoc tag")]
    JsdocError,
    #[error("ambiguous comment ignored")]
    AmbiguousCssComment,
    #[error("duplicate tag name")]
    DuplicateTagName,
    #[error("remote fetch failed")]
    RemoteFetchError,
    #[error("io error")]
    IoError,
    #[error("unknown element")]
    UnknownElement,
    #[error("unknown attribute")]
    UnknownAttribute,
    #[error("implementation detail documented")]
    ImplementationDetailDocumented,
    #[error("missing superclass module")]
    MissingSuperclassModule,
}

impl DiagnosticKind {
    #[must_use]
    pub fn default_category(self) -> DiagnosticCategory {
        match self {
            DiagnosticKind::QueryError | DiagnosticKind::IoError => DiagnosticCategory::Error,
            _ => DiagnosticCategory::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub category: DiagnosticCategory,
    pub file: String,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, file: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self {
            category: kind.default_category(),
            kind,
            file: file.into(),
            span,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(kind: DiagnosticKind, file: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        let mut diag = Self::new(kind, file, span, message);
        diag.category = DiagnosticCategory::Warning;
        diag
    }
}

/// A simple accumulator threaded through extractor passes so they never
/// need to bail out on the first recoverable problem.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn extend(&mut self, other: DiagnosticSink) {
        self.diagnostics.extend(other.diagnostics);
    }
}

#[cfg(test)]
#[path = "tests/diagnostics.rs"]
mod tests;
