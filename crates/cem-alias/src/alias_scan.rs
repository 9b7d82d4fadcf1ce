//! Collects every top-level `type X = …` declaration in one file.

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;

use crate::queries::ALIAS_DECL;
use crate::types::AliasDecl;

/// Maps alias name to its declaration. Later declarations with the same
/// name overwrite earlier ones, matching how a re-declared `type`
/// shadows its predecessor in the same scope.
#[must_use]
pub fn scan_aliases(manager: &QueryManager, grammar: Grammar, source: &str) -> FxHashMap<String, AliasDecl> {
    let mut out = FxHashMap::default();
    let Some(matcher) = manager.get_matcher(grammar, ALIAS_DECL) else {
        return out;
    };

    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);

    for captures in matcher.all_matches(tree.root_node(), source) {
        let Some(name_cap) = captures.get("name").and_then(|v| v.first()) else {
            continue;
        };
        let Some(value_cap) = captures.get("value").and_then(|v| v.first()) else {
            continue;
        };
        let name = name_cap.text(source).to_string();
        let value_text = value_cap.text(source).to_string();
        out.insert(name.clone(), AliasDecl { name, value_text });
    }

    out
}

#[cfg(test)]
#[path = "tests/alias_scan.rs"]
mod tests;
