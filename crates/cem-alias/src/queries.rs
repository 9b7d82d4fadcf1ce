//! The two TypeScript queries this crate registers with a
//! [`cem_query::QueryManager`]: top-level type aliases and named
//! imports. Field names follow `tree-sitter-typescript`'s grammar.

use cem_query::Grammar;

pub const ALIAS_DECL: &str = "cem_alias.alias_decl";
pub const NAMED_IMPORT: &str = "cem_alias.named_import";

pub const ALIAS_DECL_QUERY: &str = r"
(type_alias_declaration
  name: (type_identifier) @name
  value: (_) @value) @decl
";

pub const NAMED_IMPORT_QUERY: &str = r#"
(import_statement
  source: (string (string_fragment) @source)
  (import_clause
    (named_imports
      (import_specifier
        name: (identifier) @imported
        alias: (identifier)? @local)))) @import
"#;

/// Entries to hand to [`cem_query::QueryManager::new`]. TSX shares the
/// TypeScript alias/import grammar rules, so both grammars register the
/// same query sources.
#[must_use]
pub fn entries() -> Vec<(Grammar, &'static str, &'static str)> {
    vec![
        (Grammar::TypeScript, ALIAS_DECL, ALIAS_DECL_QUERY),
        (Grammar::TypeScript, NAMED_IMPORT, NAMED_IMPORT_QUERY),
        (Grammar::Tsx, ALIAS_DECL, ALIAS_DECL_QUERY),
        (Grammar::Tsx, NAMED_IMPORT, NAMED_IMPORT_QUERY),
    ]
}
