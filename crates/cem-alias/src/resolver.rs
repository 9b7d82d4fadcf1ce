//! Type-Alias Resolver (§4.C): unwraps a type reference through local
//! and cross-module `type X = …` declarations down to its underlying
//! union/literal form.

use std::path::Path;

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashSet;

use crate::alias_scan::scan_aliases;
use crate::import_scan::scan_imports;
use crate::loader::SourceLoader;
use crate::types::{ResolvedType, VisitKey};

pub struct AliasResolver<'a, L: SourceLoader> {
    manager: &'a QueryManager,
    loader: &'a L,
}

impl<'a, L: SourceLoader> AliasResolver<'a, L> {
    #[must_use]
    pub fn new(manager: &'a QueryManager, loader: &'a L) -> Self {
        Self { manager, loader }
    }

    /// Resolves `type_name` as referenced from `file` to its final
    /// underlying form. `file`'s source text must already be loadable
    /// through `loader` (the resolver re-reads it, since each step may
    /// move to a different file).
    #[must_use]
    pub fn resolve(&self, file: &Path, type_name: &str) -> ResolvedType {
        let mut visited: FxHashSet<VisitKey> = FxHashSet::default();
        self.resolve_inner(file, type_name, &mut visited)
            .unwrap_or_else(|| ResolvedType::unresolved(type_name.to_string()))
    }

    fn resolve_inner(&self, file: &Path, type_name: &str, visited: &mut FxHashSet<VisitKey>) -> Option<ResolvedType> {
        let key: VisitKey = (file.to_path_buf(), type_name.to_string());
        if !visited.insert(key) {
            // Cycle: stop unwinding further and report the alias name
            // itself as the terminal form rather than looping forever.
            tracing::warn!(file = %file.display(), alias = type_name, "cyclic type alias, stopping unwind");
            return Some(ResolvedType {
                text: type_name.to_string(),
                source_alias: Some(type_name.to_string()),
            });
        }

        let source = self.loader.read(file)?;
        let grammar = grammar_for(file);

        let aliases = scan_aliases(self.manager, grammar, &source);
        if let Some(decl) = aliases.get(type_name) {
            let chained = self.unwrap_value(file, &decl.value_text, visited);
            return Some(ResolvedType {
                text: chained,
                source_alias: Some(type_name.to_string()),
            });
        }

        let imports = scan_imports(self.manager, grammar, &source);
        if let Some(binding) = imports.get(type_name) {
            let Some(target_dir) = file.parent() else {
                return None;
            };
            let specifier_path = target_dir.join(&binding.specifier);
            let Some((target_file, _)) = self.loader.resolve_module_file(&specifier_path) else {
                tracing::warn!(
                    specifier = %binding.specifier,
                    from = %file.display(),
                    "could not resolve import target while unwrapping a type alias"
                );
                return None;
            };
            return self.resolve_inner(&target_file, &binding.imported_name, visited);
        }

        None
    }

    /// A `type X = Y` right-hand side may itself be a bare identifier
    /// that refers to another alias (local or imported); anything else
    /// (a union, literal, mapped type, …) is the final form and is kept
    /// verbatim, preserving `null`/`undefined` members untouched.
    fn unwrap_value(&self, file: &Path, value_text: &str, visited: &mut FxHashSet<VisitKey>) -> String {
        let trimmed = value_text.trim();
        if is_bare_identifier(trimmed) {
            if let Some(resolved) = self.resolve_inner(file, trimmed, visited) {
                return resolved.text;
            }
        }
        value_text.to_string()
    }
}

/// True for a plain identifier (`Foo`, `_x`, `$bar`) as opposed to a
/// union, literal, or other compound type expression — the shape a
/// reference has to have for it to even be worth treating as an alias
/// name rather than an already-final type.
#[must_use]
pub fn is_bare_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn grammar_for(file: &Path) -> Grammar {
    match file.extension().and_then(|e| e.to_str()) {
        Some("tsx") => Grammar::Tsx,
        _ => Grammar::TypeScript,
    }
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
