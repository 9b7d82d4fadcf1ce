//! Records produced by the type-alias resolver (§4.C).

use std::path::PathBuf;

/// The outcome of unwrapping a type reference through zero or more
/// `type X = …` declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The final, unwrapped type text — verbatim source text of the
    /// right-hand side of the last alias in the chain, or the original
    /// identifier text if it never resolved to a local declaration.
    pub text: String,
    /// The name of the alias the text came from, if resolution actually
    /// followed at least one `type` declaration. `None` means the input
    /// identifier passed through untouched (§4.C: "unknown identifiers
    /// pass through untouched").
    pub source_alias: Option<String>,
}

impl ResolvedType {
    #[must_use]
    pub fn unresolved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_alias: None,
        }
    }
}

/// A local binding introduced by an `import` statement.
#[derive(Debug, Clone)]
pub struct ImportBinding {
    /// The module specifier as written, e.g. `"./types"`.
    pub specifier: String,
    /// The name exported by the source module (may differ from the
    /// local binding under `import { Foo as Bar }`).
    pub imported_name: String,
}

/// A single `type X = …` declaration found in one file.
#[derive(Debug, Clone)]
pub struct AliasDecl {
    pub name: String,
    pub value_text: String,
}

/// Identifies one alias declaration across the whole module graph, used
/// as the visited-set key for cycle detection (§4.C).
pub type VisitKey = (PathBuf, String);
