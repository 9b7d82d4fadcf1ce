//! Finds every `html\`…\`` tagged template in a TS/JS source file and
//! the identifiers it references through `${…}` interpolations, so the
//! extractor can follow composition without evaluating any JavaScript
//! (§4.E: ternary and array composition both reduce to "this template
//! also references that other template by name").

use cem_query::{Grammar, QueryManager};
use tree_sitter::Node;

use crate::queries;

#[derive(Debug, Clone)]
pub struct TemplateSite {
    /// The `const X = html\`…\`` binding name, if this template is
    /// assigned directly to a local const.
    pub bound_name: Option<String>,
    /// The template's own literal text, backticks stripped. Escaped
    /// backticks (`\\\``) survive untouched since this is a raw slice
    /// of source text.
    pub raw: String,
    /// Identifiers referenced anywhere inside this template's `${…}`
    /// interpolations — ternary branches and array elements are both
    /// just nested expressions, so a generic identifier scan covers
    /// both without special-casing either.
    pub referenced_names: Vec<String>,
    pub start_byte: usize,
}

#[must_use]
pub fn discover_templates(manager: &QueryManager, grammar: Grammar, source: &str) -> Vec<TemplateSite> {
    let mut out = Vec::new();
    let Some(matcher) = manager.get_matcher(grammar, queries::TAGGED_TEMPLATE) else {
        return out;
    };
    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(node_cap) = captures.get("node").and_then(|v| v.first()) else {
            continue;
        };
        let node = node_cap.node;
        let Some(tag_node) = node.child(0) else {
            continue;
        };
        let tag_name = first_identifier_text(tag_node, source).unwrap_or_default();
        if tag_name != "html" {
            continue;
        }
        let Some(template_node) = find_child_of_kind(node, "template_string") else {
            continue;
        };

        let raw = strip_backticks(template_node.utf8_text(source.as_bytes()).unwrap_or(""));
        let mut referenced_names = Vec::new();
        for substitution in children_of_kind(template_node, "template_substitution") {
            collect_identifiers(substitution, source, &mut referenced_names);
        }

        out.push(TemplateSite {
            bound_name: enclosing_const_name(node, source),
            raw,
            referenced_names,
            start_byte: node.start_byte(),
        });
    }

    out
}

fn strip_backticks(text: &str) -> String {
    text.strip_prefix('`').and_then(|t| t.strip_suffix('`')).unwrap_or(text).to_string()
}

fn find_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

fn children_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).filter(|c| c.kind() == kind).collect()
}

fn first_identifier_text<'s>(node: Node, source: &'s str) -> Option<&'s str> {
    if node.kind() == "identifier" {
        return node.utf8_text(source.as_bytes()).ok();
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(text) = first_identifier_text(child, source) {
            return Some(text);
        }
    }
    None
}

fn collect_identifiers(node: Node, source: &str, out: &mut Vec<String>) {
    if node.kind() == "identifier" {
        if let Ok(text) = node.utf8_text(source.as_bytes()) {
            out.push(text.to_string());
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_identifiers(child, source, out);
    }
}

/// Walks up from a tagged-template node to see if it's the initializer
/// of `const X = html\`…\``.
fn enclosing_const_name(node: Node, source: &str) -> Option<String> {
    let parent = node.parent()?;
    if parent.kind() != "variable_declarator" {
        return None;
    }
    let name_node = parent.child(0)?;
    if name_node.kind() != "identifier" {
        return None;
    }
    name_node.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

/// Finds `el.innerHTML = …` / `el.outerHTML = …` assignments whose
/// right-hand side is a plain (untagged) template string or string
/// literal — the other half of §4.E's "`html\`…\`` tagged templates,
/// and `innerHTML`/`outerHTML` assignments".
#[must_use]
pub fn discover_assignment_templates(manager: &QueryManager, grammar: Grammar, source: &str) -> Vec<TemplateSite> {
    let mut out = Vec::new();
    let Some(matcher) = manager.get_matcher(grammar, queries::MEMBER_ASSIGNMENT) else {
        return out;
    };
    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(node_cap) = captures.get("node").and_then(|v| v.first()) else {
            continue;
        };
        let node = node_cap.node;
        let (Some(left), Some(right)) = (node.child_by_field_name("left"), node.child_by_field_name("right")) else {
            continue;
        };
        if left.kind() != "member_expression" {
            continue;
        }
        let Some(property) = left.child_by_field_name("property") else {
            continue;
        };
        let property_name = property.utf8_text(source.as_bytes()).unwrap_or("");
        if property_name != "innerHTML" && property_name != "outerHTML" {
            continue;
        }
        if right.kind() == "tagged_template_expression" {
            // Already covered by the `html`-tag scan.
            continue;
        }

        let raw = match right.kind() {
            "template_string" => strip_backticks(right.utf8_text(source.as_bytes()).unwrap_or("")),
            "string" => right
                .utf8_text(source.as_bytes())
                .unwrap_or("")
                .trim_matches(['"', '\''])
                .to_string(),
            _ => continue,
        };

        let mut referenced_names = Vec::new();
        for substitution in children_of_kind(right, "template_substitution") {
            collect_identifiers(substitution, source, &mut referenced_names);
        }

        out.push(TemplateSite {
            bound_name: None,
            raw,
            referenced_names,
            start_byte: node.start_byte(),
        });
    }

    out
}

#[cfg(test)]
#[path = "tests/template_scan.rs"]
mod tests;
