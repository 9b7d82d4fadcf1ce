//! The two CSS queries this crate registers with a
//! [`cem_query::QueryManager`]: every declaration, and every comment.

use cem_query::Grammar;

pub const DECLARATION: &str = "cem_css.declaration";
pub const COMMENT: &str = "cem_css.comment";

pub const DECLARATION_QUERY: &str = "(declaration) @decl";
pub const COMMENT_QUERY: &str = "(comment) @comment";

#[must_use]
pub fn entries() -> Vec<(Grammar, &'static str, &'static str)> {
    vec![
        (Grammar::Css, DECLARATION, DECLARATION_QUERY),
        (Grammar::Css, COMMENT, COMMENT_QUERY),
    ]
}
