//! `customElements.define('tag-name', ClassRef)` discovery (§4.F).

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::imports::ImportBinding;
use crate::queries;
use crate::types::RawExport;

/// One `customElements.define(...)` call site, already resolved as far
/// as this single file's imports allow.
#[derive(Debug, Clone)]
pub struct DefineCall {
    pub tag_name: String,
    pub class_name: String,
}

#[must_use]
pub fn discover_define_calls(manager: &QueryManager, grammar: Grammar, source: &str) -> Vec<DefineCall> {
    let mut out = Vec::new();
    let Some(matcher) = manager.get_matcher(grammar, queries::DEFINE_CALL) else {
        return out;
    };
    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(receiver) = captures.get("receiver").and_then(|v| v.first()) else {
            continue;
        };
        let Some(method) = captures.get("method").and_then(|v| v.first()) else {
            continue;
        };
        if receiver.text(source) != "customElements" || method.text(source) != "define" {
            continue;
        }
        let Some(call) = captures.get("call").and_then(|v| v.first()) else {
            continue;
        };
        let Some((tag, class_name)) = parse_call_args(call.node, source) else {
            continue;
        };
        out.push(DefineCall { tag_name: tag, class_name });
    }

    out
}

fn parse_call_args(call_node: Node, source: &str) -> Option<(String, String)> {
    let args = call_node.child_by_field_name("arguments")?;
    let mut cursor = args.walk();
    let mut named = args.named_children(&mut cursor);
    let tag_node = named.next()?;
    let class_node = named.next()?;

    let tag = tag_node
        .utf8_text(source.as_bytes())
        .ok()?
        .trim_matches(['"', '\''])
        .to_string();
    let class_name = class_node.utf8_text(source.as_bytes()).ok()?.to_string();
    Some((tag, class_name))
}

/// Turns each discovered `define` call into a module-level export
/// record, resolving the class reference against locally declared
/// class names first, then this file's import bindings (§4.F: "…
/// resolving named-import renames and default imports").
#[must_use]
pub fn resolve_define_exports(
    calls: &[DefineCall],
    local_class_names: &[String],
    imports: &FxHashMap<String, ImportBinding>,
) -> Vec<RawExport> {
    calls
        .iter()
        .map(|call| {
            if local_class_names.iter().any(|n| n == &call.class_name) {
                RawExport::CustomElementDefinition {
                    tag_name: call.tag_name.clone(),
                    class_name: call.class_name.clone(),
                    class_module: None,
                }
            } else if let Some(binding) = imports.get(&call.class_name) {
                RawExport::CustomElementDefinition {
                    tag_name: call.tag_name.clone(),
                    class_name: binding.imported_name.clone().unwrap_or_else(|| call.class_name.clone()),
                    class_module: Some(binding.specifier.clone()),
                }
            } else {
                RawExport::CustomElementDefinition {
                    tag_name: call.tag_name.clone(),
                    class_name: call.class_name.clone(),
                    class_module: None,
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/define_scan.rs"]
mod tests;
