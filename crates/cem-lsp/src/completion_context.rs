//! Completion-Context Resolver (§4.K): given a document and a cursor
//! position, decides what kind of thing the user is completing — a
//! custom-element tag name, an attribute name or value, or one of Lit's
//! `@`/`.`/`?` binding sigils.
//!
//! Hover, go-to-definition, and find-references reuse this same resolver
//! and then consult the registry with whatever `tag`/`attr` it names.

use cem_query::{Grammar, QueryManager};
use tree_sitter::{Node, Tree};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    TagName,
    AttrName { tag: String },
    AttrValue { tag: String, attr: String },
    LitEvent { tag: String },
    LitProperty { tag: String },
    LitBoolean { tag: String },
    None,
}

/// Step 1-2: locate the byte offset, select the grammar, and for TS/JS
/// descend into the innermost `html`-tagged template containing it.
#[must_use]
pub fn resolve(manager: &QueryManager, grammar: Grammar, tree: Option<&Tree>, source: &str, offset: u32) -> CompletionContext {
    let Some(tree) = tree else { return CompletionContext::None };
    let offset = offset as usize;

    match grammar {
        Grammar::Html => resolve_in_html(tree.root_node(), source, offset),
        Grammar::TypeScript | Grammar::Tsx | Grammar::JavaScript => {
            match innermost_html_template(tree.root_node(), source, offset) {
                Some((template_text, inner_offset)) => {
                    let mut parser = manager.get_parser(Grammar::Html);
                    match parser.parse(&template_text, None) {
                        Some(html_tree) => resolve_in_html(html_tree.root_node(), &template_text, inner_offset),
                        None => CompletionContext::None,
                    }
                }
                None => CompletionContext::None,
            }
        }
        Grammar::Css => CompletionContext::None,
    }
}

/// Finds the innermost `html\`…\`` tagged template containing `offset`
/// and returns its (backtick-stripped) text plus the offset translated
/// into that text's own coordinate space.
fn innermost_html_template(node: Node, source: &str, offset: usize) -> Option<(String, usize)> {
    let Some(target) = node.descendant_for_byte_range(offset, offset) else {
        return None;
    };

    let mut best: Option<Node> = None;
    let mut cursor = target;
    loop {
        if cursor.kind() == "tagged_template_expression" && is_html_tag(cursor, source) {
            best = Some(cursor);
        }
        match cursor.parent() {
            Some(parent) => cursor = parent,
            None => break,
        }
    }

    let template_expr = best?;
    let mut c = template_expr.walk();
    let template_string = template_expr.children(&mut c).find(|n| n.kind() == "template_string")?;
    let range = template_string.byte_range();
    // `` ` `` is one byte; the inner text starts right after it.
    let inner_start = range.start + 1;
    let inner_end = range.end.saturating_sub(1).max(inner_start);
    if offset < inner_start || offset > inner_end {
        return None;
    }
    let text = source.get(inner_start..inner_end)?.to_string();
    Some((text, offset - inner_start))
}

fn is_html_tag(node: Node, source: &str) -> bool {
    node.child(0).and_then(|tag| tag.utf8_text(source.as_bytes()).ok()).is_some_and(|text| text == "html")
}

/// Step 3-5 against an HTML parse tree (either the real document, or the
/// reparsed text of an embedded template).
fn resolve_in_html(root: Node, source: &str, offset: usize) -> CompletionContext {
    let Some(node) = root.descendant_for_byte_range(offset, offset) else {
        return heuristic(source, offset);
    };

    if let Some(ctx) = from_attribute_value(node, source) {
        return ctx;
    }
    if let Some(ctx) = from_attribute_name(node, source, offset) {
        return ctx;
    }
    if let Some(ctx) = from_tag_name(node, source) {
        return ctx;
    }
    if node.kind() == "ERROR" || node.parent().is_some_and(|p| p.kind() == "ERROR") {
        return heuristic(source, offset);
    }
    if node.kind() == "text" {
        return CompletionContext::None;
    }
    heuristic(source, offset)
}

fn from_attribute_value(node: Node, source: &str) -> Option<CompletionContext> {
    let mut n = node;
    loop {
        if n.kind() == "attribute_value" || n.kind() == "quoted_attribute_value" {
            let attribute = find_ancestor(n, "attribute")?;
            let attr_name = named_child_text(attribute, "attribute_name", source).unwrap_or_default();
            let tag = enclosing_tag_name(attribute, source)?;
            return Some(CompletionContext::AttrValue { tag, attr: attr_name });
        }
        n = n.parent()?;
    }
}

fn from_attribute_name(node: Node, source: &str, offset: usize) -> Option<CompletionContext> {
    let attribute = if node.kind() == "attribute" {
        node
    } else if node.kind() == "attribute_name" {
        node.parent()?
    } else {
        find_ancestor(node, "attribute")?
    };
    // Typing the name means the cursor sits before any `=`.
    let attr_text = attribute.utf8_text(source.as_bytes()).ok()?;
    let local_offset = offset.saturating_sub(attribute.start_byte());
    if attr_text[..local_offset.min(attr_text.len())].contains('=') {
        return None;
    }
    let tag = enclosing_tag_name(attribute, source)?;
    let typed = &attr_text[..local_offset.min(attr_text.len())];
    Some(match typed.chars().next() {
        Some('@') => CompletionContext::LitEvent { tag },
        Some('.') => CompletionContext::LitProperty { tag },
        Some('?') => CompletionContext::LitBoolean { tag },
        _ => CompletionContext::AttrName { tag },
    })
}

fn from_tag_name(node: Node, source: &str) -> Option<CompletionContext> {
    let n = if node.kind() == "tag_name" { node } else { return None };
    let text = n.utf8_text(source.as_bytes()).ok()?;
    text.contains('-').then_some(CompletionContext::TagName)
}

fn find_ancestor<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut n = node;
    loop {
        if n.kind() == kind {
            return Some(n);
        }
        n = n.parent()?;
    }
}

fn named_child_text(node: Node, kind: &str, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)?.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

fn enclosing_tag_name(node: Node, source: &str) -> Option<String> {
    let start_tag = find_ancestor(node, "start_tag").or_else(|| find_ancestor(node, "self_closing_tag"))?;
    let name = named_child_text(start_tag, "tag_name", source)?;
    name.contains('-').then_some(name)
}

/// Text-based fallback for `ERROR` nodes, which tree-sitter produces
/// liberally while the user is mid-keystroke (§4.K step 3: "common
/// during typing").
fn heuristic(source: &str, offset: usize) -> CompletionContext {
    let Some(prefix) = source.get(..offset) else { return CompletionContext::None };

    if let Some(open) = prefix.rfind('<') {
        let between = &prefix[open + 1..];
        if !between.is_empty() && between.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return CompletionContext::TagName;
        }
    }

    // Inside `<tag-name ... attr="` with no closing quote yet.
    if let Some(quote) = prefix.rfind(['"', '\'']) {
        let before_quote = &prefix[..quote];
        if let Some(eq) = before_quote.rfind('=') {
            let attr = before_quote[..eq].rsplit(|c: char| c.is_whitespace() || c == '<').next().unwrap_or("");
            if let Some(tag) = current_open_tag_name(&prefix[..eq]) {
                if !attr.is_empty() {
                    return CompletionContext::AttrValue { tag, attr: attr.to_string() };
                }
            }
        }
    }

    // Past the tag name, still inside the start tag's attribute list
    // (no closing `>` yet), with nothing typed for the current
    // attribute beyond maybe a Lit `@`/`.`/`?` sigil — e.g.
    // `<my-button `, `<my-button @`, `<my-button id="x" .`.
    if let Some(open) = prefix.rfind('<') {
        let after_open = &prefix[open + 1..];
        if !after_open.contains('>') {
            if let Some(tag) = current_open_tag_name(prefix) {
                let tag_end = open + 1 + tag.len();
                let typed = prefix[tag_end..].trim_start();
                let current_token = typed.rsplit(char::is_whitespace).next().unwrap_or(typed);
                if !current_token.contains(['=', '"', '\'']) {
                    return match current_token.chars().next() {
                        Some('@') => CompletionContext::LitEvent { tag },
                        Some('.') => CompletionContext::LitProperty { tag },
                        Some('?') => CompletionContext::LitBoolean { tag },
                        _ => CompletionContext::AttrName { tag },
                    };
                }
            }
        }
    }

    CompletionContext::None
}

fn current_open_tag_name(prefix: &str) -> Option<String> {
    let open = prefix.rfind('<')?;
    let rest = &prefix[open + 1..];
    let name: String = rest.chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '-').collect();
    name.contains('-').then_some(name)
}

#[cfg(test)]
#[path = "tests/completion_context.rs"]
mod tests;
