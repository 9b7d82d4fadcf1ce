//! Top-level discovery queries (§4.F). Each query only locates a node;
//! field-by-field detail extraction walks the located subtree manually
//! with `child_by_field_name`/`kind()`, the same split cem-html's
//! template scan uses, since the exact shape of decorators, heritage
//! clauses, and parameter properties is easier to get right by hand
//! than to encode as a single query pattern.

use cem_query::Grammar;

pub const CLASS_DECL: &str = "cem_extract.class_decl";
pub const IMPORT: &str = "cem_extract.import";
pub const DEFINE_CALL: &str = "cem_extract.define_call";
pub const COMMENT: &str = "cem_extract.comment";

pub const CLASS_DECL_QUERY: &str = "(class_declaration) @class";

pub const IMPORT_QUERY: &str = "(import_statement) @import";

pub const DEFINE_CALL_QUERY: &str = r"
(call_expression
  function: (member_expression
    object: (identifier) @receiver
    property: (property_identifier) @method)) @call
";

pub const COMMENT_QUERY: &str = "(comment) @comment";

#[must_use]
pub fn entries() -> Vec<(Grammar, &'static str, &'static str)> {
    let mut out = Vec::new();
    for grammar in [Grammar::TypeScript, Grammar::Tsx, Grammar::JavaScript] {
        out.push((grammar, CLASS_DECL, CLASS_DECL_QUERY));
        out.push((grammar, IMPORT, IMPORT_QUERY));
        out.push((grammar, DEFINE_CALL, DEFINE_CALL_QUERY));
        out.push((grammar, COMMENT, COMMENT_QUERY));
    }
    out
}
