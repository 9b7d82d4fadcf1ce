//! General import scan (§4.F superclass/mixin resolution, style-binding
//! collection): unlike `cem_alias`'s named-import-only scan (built for
//! type-position resolution), this also tracks default imports, since
//! `import styles from "./x.css"` and `import Base from "./base.js"`
//! both matter to class extraction.

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::queries;

#[derive(Debug, Clone)]
pub struct ImportBinding {
    pub specifier: String,
    /// `None` means this binding came from a default import.
    pub imported_name: Option<String>,
}

#[must_use]
pub fn scan_imports(manager: &QueryManager, grammar: Grammar, source: &str) -> FxHashMap<String, ImportBinding> {
    let mut out = FxHashMap::default();
    let Some(matcher) = manager.get_matcher(grammar, queries::IMPORT) else {
        return out;
    };
    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(import_cap) = captures.get("import").and_then(|v| v.first()) else {
            continue;
        };
        let node = import_cap.node;
        let Some(source_node) = node.child_by_field_name("source") else {
            continue;
        };
        let specifier = source_node
            .utf8_text(source.as_bytes())
            .unwrap_or("")
            .trim_matches(['"', '\''])
            .to_string();

        let Some(clause) = find_child_of_kind(node, "import_clause") else {
            continue;
        };

        let mut cursor = clause.walk();
        for child in clause.children(&mut cursor) {
            match child.kind() {
                "identifier" => {
                    // Default import: `import Foo from "..."`.
                    let name = child.utf8_text(source.as_bytes()).unwrap_or("").to_string();
                    out.insert(name, ImportBinding { specifier: specifier.clone(), imported_name: None });
                }
                "named_imports" => {
                    collect_named(child, source, &specifier, &mut out);
                }
                _ => {}
            }
        }
    }

    out
}

fn collect_named(named_imports: Node, source: &str, specifier: &str, out: &mut FxHashMap<String, ImportBinding>) {
    let mut cursor = named_imports.walk();
    for spec in named_imports.children(&mut cursor).filter(|c| c.kind() == "import_specifier") {
        let Some(name_node) = spec.child_by_field_name("name") else {
            continue;
        };
        let imported_name = name_node.utf8_text(source.as_bytes()).unwrap_or("").to_string();
        let local_name = spec
            .child_by_field_name("alias")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .map(str::to_string)
            .unwrap_or_else(|| imported_name.clone());
        out.insert(
            local_name,
            ImportBinding {
                specifier: specifier.to_string(),
                imported_name: Some(imported_name),
            },
        );
    }
}

fn find_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

#[cfg(test)]
#[path = "tests/imports.rs"]
mod tests;
