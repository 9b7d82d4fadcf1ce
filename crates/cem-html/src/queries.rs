//! Queries this crate registers with a [`cem_query::QueryManager`]:
//! `html`-tagged templates and `innerHTML`/`outerHTML` assignments in
//! TypeScript/JavaScript, and elements/comments in the re-parsed HTML.

use cem_query::Grammar;

pub const TAGGED_TEMPLATE: &str = "cem_html.tagged_template";
pub const MEMBER_ASSIGNMENT: &str = "cem_html.member_assignment";
pub const ELEMENT: &str = "cem_html.element";
pub const COMMENT: &str = "cem_html.comment";

pub const TAGGED_TEMPLATE_QUERY: &str = "(tagged_template_expression) @node";
pub const MEMBER_ASSIGNMENT_QUERY: &str = "(assignment_expression) @node";
pub const ELEMENT_QUERY: &str = "(element) @el";
pub const COMMENT_QUERY: &str = "(comment) @comment";

#[must_use]
pub fn ts_js_entries() -> Vec<(Grammar, &'static str, &'static str)> {
    let mut out = Vec::new();
    for grammar in [Grammar::TypeScript, Grammar::Tsx, Grammar::JavaScript] {
        out.push((grammar, TAGGED_TEMPLATE, TAGGED_TEMPLATE_QUERY));
        out.push((grammar, MEMBER_ASSIGNMENT, MEMBER_ASSIGNMENT_QUERY));
    }
    out
}

#[must_use]
pub fn html_entries() -> Vec<(Grammar, &'static str, &'static str)> {
    vec![(Grammar::Html, ELEMENT, ELEMENT_QUERY), (Grammar::Html, COMMENT, COMMENT_QUERY)]
}

#[must_use]
pub fn entries() -> Vec<(Grammar, &'static str, &'static str)> {
    let mut out = ts_js_entries();
    out.extend(html_entries());
    out
}
