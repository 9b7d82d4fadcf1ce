//! Finds every custom-element tag usage (and its attributes) in a
//! document, so the LSP can check them against the registry for the
//! `unknown-element`/`unknown-attribute` diagnostics (§6).
//!
//! Shares the element/attribute node-kind layout `cem-html`'s extractor
//! uses, and `cem-html`'s template discovery for locating embedded
//! `html\`…\`` templates in TS/JS sources.

use cem_html::template_scan;
use cem_query::{Grammar, QueryManager};
use tree_sitter::Node;

pub struct AttributeUsage {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

pub struct ElementUsage {
    pub tag: String,
    pub start: u32,
    pub end: u32,
    pub attributes: Vec<AttributeUsage>,
}

#[must_use]
pub fn scan(manager: &QueryManager, grammar: Grammar, source: &str) -> Vec<ElementUsage> {
    match grammar {
        Grammar::Html => {
            let mut parser = manager.get_parser(Grammar::Html);
            let Some(tree) = parser.parse(source, None) else { return Vec::new() };
            drop(parser);
            scan_tree(manager, tree.root_node(), source, 0)
        }
        Grammar::TypeScript | Grammar::Tsx | Grammar::JavaScript => {
            let mut out = Vec::new();
            for site in template_scan::discover_templates(manager, grammar, source) {
                let Some(backtick) = source.get(site.start_byte..).and_then(|rest| rest.find('`')) else {
                    continue;
                };
                let offset = site.start_byte + backtick + 1;
                let mut parser = manager.get_parser(Grammar::Html);
                let Some(tree) = parser.parse(&site.raw, None) else { continue };
                drop(parser);
                out.extend(scan_tree(manager, tree.root_node(), &site.raw, offset));
            }
            out
        }
        Grammar::Css => Vec::new(),
    }
}

fn scan_tree(manager: &QueryManager, root: Node, source: &str, offset: usize) -> Vec<ElementUsage> {
    let Some(matcher) = manager.get_matcher(Grammar::Html, cem_html::queries::ELEMENT) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for captures in matcher.all_matches(root, source) {
        let Some(el) = captures.get("el").and_then(|v| v.first()) else { continue };
        let Some(usage) = element_usage(el.node, source, offset) else { continue };
        out.push(usage);
    }
    out
}

fn element_usage(el: Node, source: &str, offset: usize) -> Option<ElementUsage> {
    let mut cursor = el.walk();
    let start_tag = el.children(&mut cursor).find(|c| c.kind() == "start_tag" || c.kind() == "self_closing_tag")?;

    let mut tag_cursor = start_tag.walk();
    let tag_name_node = start_tag.children(&mut tag_cursor).find(|c| c.kind() == "tag_name")?;
    let tag = tag_name_node.utf8_text(source.as_bytes()).ok()?.to_string();
    if !tag.contains('-') {
        return None;
    }

    let mut attributes = Vec::new();
    let mut attr_cursor = start_tag.walk();
    for attr in start_tag.children(&mut attr_cursor).filter(|c| c.kind() == "attribute") {
        let mut name_cursor = attr.walk();
        let Some(name_node) = attr.children(&mut name_cursor).find(|c| c.kind() == "attribute_name") else {
            continue;
        };
        let Ok(name) = name_node.utf8_text(source.as_bytes()) else { continue };
        attributes.push(AttributeUsage {
            name: name.to_string(),
            start: (offset + name_node.start_byte()) as u32,
            end: (offset + name_node.end_byte()) as u32,
        });
    }

    Some(ElementUsage {
        tag,
        start: (offset + tag_name_node.start_byte()) as u32,
        end: (offset + tag_name_node.end_byte()) as u32,
        attributes,
    })
}

#[cfg(test)]
#[path = "tests/usage_scan.rs"]
mod tests;
