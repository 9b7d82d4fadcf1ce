//! CSS Extractor (§4.D): turns one CSS source (an external file or the
//! text of a CSS-tagged template literal) into a name-keyed map of
//! [`CssCustomProperty`] records.

use cem_common::{Diagnostic, DiagnosticKind, DiagnosticSink, Span};
use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;

use crate::comments::{self, CommentSpan};
use crate::queries;
use crate::types::{CssCustomProperty, CssExtractResult};
use crate::varscan::{find_top_level_var_calls, Fallback};

/// Extracts custom-property records from `source`, attributing
/// diagnostics to `file` (a display path, not necessarily on disk —
/// template-literal sources use a synthetic label).
#[must_use]
pub fn extract(manager: &QueryManager, file: &str, source: &str, sink: &mut DiagnosticSink) -> CssExtractResult {
    let mut by_name: FxHashMap<String, CssCustomProperty> = FxHashMap::default();

    let Some(decl_matcher) = manager.get_matcher(Grammar::Css, queries::DECLARATION) else {
        return CssExtractResult::default();
    };
    let Some(comment_matcher) = manager.get_matcher(Grammar::Css, queries::COMMENT) else {
        return CssExtractResult::default();
    };

    let mut parser = manager.get_parser(Grammar::Css);
    let Some(tree) = parser.parse(source, None) else {
        return CssExtractResult::default();
    };
    drop(parser);
    let root = tree.root_node();

    let comment_spans: Vec<CommentSpan> = comment_matcher
        .all_matches(root, source)
        .into_iter()
        .filter_map(|m| m.get("comment").and_then(|v| v.first()).copied())
        .map(|c| CommentSpan {
            start: c.node.start_byte(),
            end: c.node.end_byte(),
        })
        .collect();

    for decl_match in decl_matcher.all_matches(root, source) {
        let Some(decl_cap) = decl_match.get("decl").and_then(|v| v.first()) else {
            continue;
        };
        let node = decl_cap.node;
        let decl_text = decl_cap.text(source);
        let start_byte = node.start_byte() as u32;

        let Some(colon_idx) = decl_text.find(':') else {
            continue;
        };
        let prop_name = decl_text[..colon_idx].trim();
        let after_colon = &decl_text[colon_idx + 1..];
        let leading_ws = after_colon.len() - after_colon.trim_start().len();
        // Absolute byte offset of `value_raw`'s first character in
        // `source`, needed below to resolve each `var()` call's own
        // nearest preceding comment rather than one shared declaration-wide.
        let value_start_abs = start_byte as usize + colon_idx + 1 + leading_ws;
        let value_raw = after_colon.trim().trim_end_matches(';').trim();

        if let Some(name) = prop_name.strip_prefix("--") {
            let preceding_comment = comments::nearest_preceding(&comment_spans, source, node.start_byte())
                .map(|c| comments::normalize(c.span_text(source)));
            if !is_inside_host_block(node, source) {
                continue;
            }
            if name.starts_with('_') {
                // Private, but it must still be visible to nested var()
                // scanning elsewhere — just don't emit a record for it.
                continue;
            }
            let default = non_empty(value_raw.to_string());
            upsert(&mut by_name, CssCustomProperty {
                name: prop_name.to_string(),
                syntax: None,
                default,
                summary: None,
                description: preceding_comment,
                deprecated: None,
                start_byte,
            });
            continue;
        }

        let calls = find_top_level_var_calls(value_raw);
        if calls.is_empty() {
            continue;
        }

        // A comment directly preceding the whole declaration (e.g. one
        // leading comment above `margin: var(--a) var(--b);`) is a
        // candidate for every call in it; a comment directly preceding
        // one particular call (e.g. `light-dark(/** a */ var(--x), /**
        // b */ var(--y))`) overrides that fallback for just that call.
        // A comment is only "ambiguous" once 2+ calls actually resolve
        // to the very same comment.
        let declaration_comment = comments::nearest_preceding(&comment_spans, source, node.start_byte());
        let call_comments: Vec<Option<&CommentSpan>> = calls
            .iter()
            .map(|call| {
                comments::nearest_preceding(&comment_spans, source, value_start_abs + call.span.0).or(declaration_comment)
            })
            .collect();

        let mut use_count: FxHashMap<usize, usize> = FxHashMap::default();
        for comment in call_comments.iter().flatten() {
            *use_count.entry(comment.start).or_insert(0) += 1;
        }

        let mut warned: rustc_hash::FxHashSet<usize> = rustc_hash::FxHashSet::default();

        for (call, comment) in calls.iter().zip(call_comments.iter()) {
            let target = call.innermost_non_private();
            if target.private() {
                continue;
            }
            let default = match &target.fallback {
                Fallback::None => None,
                Fallback::Literal(s) => non_empty(s.clone()),
                Fallback::Nested(inner) => non_empty(inner.raw.clone()),
            };

            let ambiguous = comment.is_some_and(|c| use_count.get(&c.start).copied().unwrap_or(0) > 1);
            if ambiguous {
                if let Some(c) = comment {
                    if warned.insert(c.start) {
                        sink.push(Diagnostic::warning(
                            DiagnosticKind::AmbiguousCssComment,
                            file,
                            Span::at(start_byte),
                            "Ambiguous comment ignored",
                        ));
                    }
                }
            }

            let description = if ambiguous { None } else { comment.map(|c| comments::normalize(c.span_text(source))) };
            upsert(&mut by_name, CssCustomProperty {
                name: target.name.clone(),
                syntax: None,
                default,
                summary: None,
                description,
                deprecated: None,
                start_byte,
            });
        }
    }

    let mut result = CssExtractResult {
        properties: by_name.into_values().collect(),
    };
    result.sort();
    result
}

fn upsert(map: &mut FxHashMap<String, CssCustomProperty>, prop: CssCustomProperty) {
    map.insert(prop.name.clone(), prop);
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// True when `decl` sits inside a `:host { … }` rule's block — the only
/// place the spec treats a `--x: value` declaration as an
/// author-defined custom property rather than noise.
fn is_inside_host_block(decl: tree_sitter::Node, source: &str) -> bool {
    let mut current = decl.parent();
    while let Some(node) = current {
        if node.kind() == "rule_set" {
            let Some(selectors) = node.child(0) else {
                return false;
            };
            return selectors.utf8_text(source.as_bytes()).unwrap_or("").contains(":host");
        }
        current = node.parent();
    }
    false
}

#[cfg(test)]
#[path = "tests/extractor.rs"]
mod tests;
