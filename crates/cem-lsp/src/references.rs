//! Find references (§4.K): every usage of a tag name across the
//! documents currently open in the client.

use cem_query::QueryManager;
use tower_lsp_server::ls_types::{Location, Position, Range};

use crate::document::DocumentStore;
use crate::usage_scan;

#[must_use]
pub fn references_for(manager: &QueryManager, store: &DocumentStore, tag: &str) -> Vec<Location> {
    let mut out = Vec::new();
    for entry in store.iter() {
        let uri = entry.key().clone();
        let document = entry.value();
        let Some(grammar) = document.grammar else { continue };
        for usage in usage_scan::scan(manager, grammar, &document.text) {
            if usage.tag != tag {
                continue;
            }
            let start = document.offset_to_position(usage.start);
            let end = document.offset_to_position(usage.end);
            out.push(Location {
                uri: uri.clone(),
                range: Range {
                    start: Position { line: start.line, character: start.character },
                    end: Position { line: end.line, character: end.character },
                },
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/references.rs"]
mod tests;
