//! HTML-in-Template Extractor (§4.E): ties `template_scan` (finding
//! `html\`…\`` sites in TS/JS) to `comment_meta` and a fresh HTML parse
//! of each composed template, producing deduplicated slot/part records.

use cem_query::{Grammar, QueryManager};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::comment_meta;
use crate::queries;
use crate::template_scan::{discover_assignment_templates, discover_templates, TemplateSite};
use crate::types::{HtmlExtractResult, HtmlPart, HtmlSlot};

/// Extracts slot/part records from every `html\`…\`` template (and its
/// composed dependents) found in one TS/JS source file.
#[must_use]
pub fn extract(manager: &QueryManager, grammar: Grammar, source: &str) -> HtmlExtractResult {
    let mut sites = discover_templates(manager, grammar, source);
    sites.extend(discover_assignment_templates(manager, grammar, source));
    let by_name: FxHashMap<&str, &TemplateSite> =
        sites.iter().filter_map(|s| s.bound_name.as_deref().map(|n| (n, s))).collect();

    let mut result = HtmlExtractResult::default();
    for site in &sites {
        let mut visited = FxHashSet::default();
        let mut texts = Vec::new();
        collect_composed_texts(site, &by_name, &mut visited, &mut texts);
        for text in texts {
            let sub = extract_from_html_text(manager, &text);
            merge_into(&mut result, sub);
        }
    }
    result
}

fn collect_composed_texts<'a>(
    site: &'a TemplateSite,
    by_name: &FxHashMap<&str, &'a TemplateSite>,
    visited: &mut FxHashSet<usize>,
    out: &mut Vec<String>,
) {
    if !visited.insert(site.start_byte) {
        return;
    }
    out.push(site.raw.clone());
    for name in &site.referenced_names {
        if let Some(target) = by_name.get(name.as_str()) {
            collect_composed_texts(target, by_name, visited, out);
        }
    }
}

fn extract_from_html_text(manager: &QueryManager, text: &str) -> HtmlExtractResult {
    let mut result = HtmlExtractResult::default();

    let Some(element_matcher) = manager.get_matcher(Grammar::Html, queries::ELEMENT) else {
        return result;
    };
    let Some(comment_matcher) = manager.get_matcher(Grammar::Html, queries::COMMENT) else {
        return result;
    };
    let mut parser = manager.get_parser(Grammar::Html);
    let Some(tree) = parser.parse(text, None) else {
        return result;
    };
    drop(parser);
    let root = tree.root_node();

    let comment_spans: Vec<(usize, usize)> = comment_matcher
        .all_matches(root, text)
        .into_iter()
        .filter_map(|m| m.get("comment").and_then(|v| v.first()).copied())
        .map(|c| (c.node.start_byte(), c.node.end_byte()))
        .collect();

    for el_match in element_matcher.all_matches(root, text) {
        let Some(el_cap) = el_match.get("el").and_then(|v| v.first()) else {
            continue;
        };
        let el = el_cap.node;
        let Some((tag, attrs)) = element_info(el, text) else {
            continue;
        };

        let meta = nearest_preceding_comment(&comment_spans, text, el.start_byte())
            .map(|raw| comment_meta::parse(raw))
            .unwrap_or_default();

        if tag == "slot" {
            let name = attrs.get("name").cloned().unwrap_or_default();
            push_slot(&mut result.slots, HtmlSlot {
                name,
                summary: meta.summary.clone(),
                description: meta.description.clone(),
                deprecated: meta.deprecated.clone(),
            });
        }
        if let Some(part_name) = attrs.get("part") {
            push_part(&mut result.parts, HtmlPart {
                name: part_name.clone(),
                summary: meta.summary,
                description: meta.description,
                deprecated: meta.deprecated,
            });
        }
    }

    result
}

fn push_slot(slots: &mut Vec<HtmlSlot>, slot: HtmlSlot) {
    if let Some(existing) = slots.iter_mut().find(|s| s.name == slot.name) {
        existing.merge_additive(slot);
    } else {
        slots.push(slot);
    }
}

fn push_part(parts: &mut Vec<HtmlPart>, part: HtmlPart) {
    if let Some(existing) = parts.iter_mut().find(|p| p.name == part.name) {
        existing.merge_additive(part);
    } else {
        parts.push(part);
    }
}

fn merge_into(result: &mut HtmlExtractResult, sub: HtmlExtractResult) {
    for slot in sub.slots {
        push_slot(&mut result.slots, slot);
    }
    for part in sub.parts {
        push_part(&mut result.parts, part);
    }
}

fn element_info(el: tree_sitter::Node, source: &str) -> Option<(String, FxHashMap<String, String>)> {
    let mut cursor = el.walk();
    let start_tag = el
        .children(&mut cursor)
        .find(|c| c.kind() == "start_tag" || c.kind() == "self_closing_tag")?;

    let mut tag_cursor = start_tag.walk();
    let tag_name_node = start_tag.children(&mut tag_cursor).find(|c| c.kind() == "tag_name")?;
    let tag_name = tag_name_node.utf8_text(source.as_bytes()).ok()?.to_string();

    let mut attrs = FxHashMap::default();
    let mut attr_cursor = start_tag.walk();
    for attr in start_tag.children(&mut attr_cursor).filter(|c| c.kind() == "attribute") {
        let raw = attr.utf8_text(source.as_bytes()).unwrap_or("");
        if let Some((name, value)) = raw.split_once('=') {
            attrs.insert(name.trim().to_string(), value.trim().trim_matches(['"', '\'']).to_string());
        } else {
            attrs.insert(raw.trim().to_string(), String::new());
        }
    }

    Some((tag_name, attrs))
}

fn nearest_preceding_comment<'a>(comments: &[(usize, usize)], source: &'a str, before_byte: usize) -> Option<&'a str> {
    let &(start, end) = comments
        .iter()
        .filter(|&&(_, end)| end <= before_byte)
        .filter(|&&(_, end)| source.get(end..before_byte).is_some_and(|gap| gap.trim().is_empty()))
        .max_by_key(|&&(_, end)| end)?;
    // `<!--` is 4 bytes, `-->` is 3.
    source.get(start + 4..end.saturating_sub(3))
}

#[cfg(test)]
#[path = "tests/extractor.rs"]
mod tests;
