//! Shared primitives for the CEM manifest pipeline.
//!
//! Every other `cem-*` crate depends on this one for:
//! - byte [`span::Span`]s and the [`position::LineMap`] byte↔UTF-16 bridge
//! - the [`diagnostics::Diagnostic`] / [`diagnostics::DiagnosticSink`] non-fatal error channel
//! - process-wide logging setup ([`logging`])

pub mod diagnostics;
pub mod logging;
pub mod position;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticKind, DiagnosticSink};
pub use position::{LineMap, Location, Position, Range};
pub use span::{Span, Spanned};

/// Sum type for `deprecated` fields across the data model (§3).
///
/// Modeled as `Option<Deprecated>` at call sites so the `None` case is
/// simply a missing field rather than a variant, matching the manifest
/// JSON where an un-deprecated declaration omits `deprecated` entirely.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Deprecated {
    Bool(bool),
    Reason(String),
}

impl Deprecated {
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecated::Bool(_) => None,
            Deprecated::Reason(reason) => Some(reason.as_str()),
        }
    }

    /// Fill an empty class/AST-derived deprecation from a JSDoc one (§4.G step 2/merge rules).
    #[must_use]
    pub fn merge_fill(ast: Option<Deprecated>, jsdoc: Option<Deprecated>) -> Option<Deprecated> {
        ast.or(jsdoc)
    }
}
