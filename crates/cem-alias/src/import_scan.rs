//! Collects local bindings introduced by named `import { … } from "…"`
//! statements in one file.

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;

use crate::queries::NAMED_IMPORT;
use crate::types::ImportBinding;

/// Maps the local binding name to where it came from. `import { Foo as
/// Bar }` is keyed by `Bar`, with `imported_name` set to `Foo`.
#[must_use]
pub fn scan_imports(manager: &QueryManager, grammar: Grammar, source: &str) -> FxHashMap<String, ImportBinding> {
    let mut out = FxHashMap::default();
    let Some(matcher) = manager.get_matcher(grammar, NAMED_IMPORT) else {
        return out;
    };

    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(source_cap) = captures.get("source").and_then(|v| v.first()) else {
            continue;
        };
        let specifier = source_cap.text(source).to_string();

        let imported_names = captures.get("imported").cloned().unwrap_or_default();
        let local_names = captures.get("local").cloned().unwrap_or_default();

        for (i, imported_cap) in imported_names.iter().enumerate() {
            let imported_name = imported_cap.text(source).to_string();
            let local_name = local_names
                .get(i)
                .map(|c| c.text(source).to_string())
                .unwrap_or_else(|| imported_name.clone());
            out.insert(
                local_name,
                ImportBinding {
                    specifier: specifier.clone(),
                    imported_name,
                },
            );
        }
    }

    out
}

#[cfg(test)]
#[path = "tests/import_scan.rs"]
mod tests;
