//! A thin, borrow-checked wrapper around `tree_sitter::Query` +
//! `QueryCursor` that hands callers a capture-name-indexed map instead of
//! raw capture indices, per §4.A's `Matcher.captures(match, source) →
//! CaptureMap` contract.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

#[derive(Debug, Clone, Copy)]
pub struct Capture<'tree> {
    pub node: Node<'tree>,
    pub start_byte: usize,
    pub node_id: usize,
}

impl<'tree> Capture<'tree> {
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.node.byte_range()).unwrap_or("")
    }
}

/// Ordered captures for a single capture name within one match.
pub type CaptureMap<'tree> = FxHashMap<&'static str, Vec<Capture<'tree>>>;

/// A compiled query plus the static capture-name table needed to turn
/// tree-sitter's numeric capture indices back into names.
pub struct Matcher {
    query: Arc<Query>,
    capture_names: Vec<&'static str>,
}

impl Matcher {
    pub(crate) fn new(query: Arc<Query>, capture_names: Vec<&'static str>) -> Self {
        Self {
            query,
            capture_names,
        }
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Runs the query against `node`'s subtree and returns one `CaptureMap`
    /// per match, in tree order.
    pub fn all_matches<'tree>(&self, node: Node<'tree>, source: &str) -> Vec<CaptureMap<'tree>> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, node, source.as_bytes());
        let mut out = Vec::new();
        while let Some(m) = matches.next() {
            let mut map: CaptureMap<'tree> = FxHashMap::default();
            for capture in m.captures {
                let Some(name) = self.capture_names.get(capture.index as usize).copied() else {
                    continue;
                };
                map.entry(name).or_default().push(Capture {
                    node: capture.node,
                    start_byte: capture.node.start_byte(),
                    node_id: capture.node.id(),
                });
            }
            out.push(map);
        }
        out
    }
}
