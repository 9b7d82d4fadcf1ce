//! Document Model (§4.J): open documents keyed by URI, each carrying
//! `{text, version, languageId, tree}`. Byte offsets are used internally;
//! the LSP edge crosses to UTF-16 code units via [`cem_common::LineMap`].

use cem_common::{LineMap, Position};
use cem_query::{Grammar, QueryManager};
use dashmap::DashMap;
use tower_lsp_server::ls_types::Uri;
use tree_sitter::Tree;

/// One open document: its current text, the grammar selected for its
/// `languageId`, and the parse tree produced by the last full or
/// incremental reparse.
pub struct Document {
    pub text: String,
    pub version: i32,
    pub language_id: String,
    pub grammar: Option<Grammar>,
    pub tree: Option<Tree>,
    pub line_map: LineMap,
}

impl Document {
    #[must_use]
    pub fn new(manager: &QueryManager, text: String, version: i32, language_id: String) -> Self {
        let grammar = Grammar::from_language_id(&language_id);
        let tree = grammar.and_then(|g| parse(manager, g, &text, None));
        let line_map = LineMap::build(&text);
        Self { text, version, language_id, grammar, tree, line_map }
    }

    /// Full-text replacement (`TextDocumentContentChangeEvent` with no
    /// `range`).
    pub fn replace_text(&mut self, manager: &QueryManager, text: String, version: i32) {
        self.tree = self.grammar.and_then(|g| parse(manager, g, &text, self.tree.as_ref()));
        self.line_map = LineMap::build(&text);
        self.text = text;
        self.version = version;
    }

    /// Applies one incremental `{range, text}` edit (`INCREMENTAL` sync
    /// mode): splices `text` into the stored document in place of
    /// `range`, tells the old tree what moved via [`tree_sitter::Tree::edit`],
    /// then reparses against that edited tree so tree-sitter can reuse
    /// the unaffected subtrees. `range: None` is a full-document
    /// replacement, same as [`Document::replace_text`].
    pub fn apply_change(&mut self, manager: &QueryManager, range: Option<cem_common::Range>, text: String, version: i32) {
        let Some(range) = range else {
            self.replace_text(manager, text, version);
            return;
        };
        let (Some(start_byte), Some(old_end_byte)) = (self.position_to_offset(range.start), self.position_to_offset(range.end)) else {
            // Position didn't map onto the current text (stale range) —
            // fall back to a full replacement rather than corrupt the tree.
            self.replace_text(manager, text, version);
            return;
        };

        let start_position = point_at_byte(&self.text, start_byte);
        let old_end_position = point_at_byte(&self.text, old_end_byte);

        let mut new_text = String::with_capacity(self.text.len() - (old_end_byte - start_byte) as usize + text.len());
        new_text.push_str(&self.text[..start_byte as usize]);
        new_text.push_str(&text);
        new_text.push_str(&self.text[old_end_byte as usize..]);

        let new_end_byte = start_byte + u32::try_from(text.len()).unwrap_or(u32::MAX);
        let new_end_position = point_at_byte(&new_text, new_end_byte);

        if let Some(tree) = self.tree.as_mut() {
            tree.edit(&tree_sitter::InputEdit {
                start_byte: start_byte as usize,
                old_end_byte: old_end_byte as usize,
                new_end_byte: new_end_byte as usize,
                start_position,
                old_end_position,
                new_end_position,
            });
        }

        self.tree = self.grammar.and_then(|g| parse(manager, g, &new_text, self.tree.as_ref()));
        self.line_map = LineMap::build(&new_text);
        self.text = new_text;
        self.version = version;
    }

    #[must_use]
    pub fn offset_to_position(&self, offset: u32) -> Position {
        self.line_map.offset_to_position(offset, &self.text)
    }

    #[must_use]
    pub fn position_to_offset(&self, position: Position) -> Option<u32> {
        self.line_map.position_to_offset(position, &self.text)
    }

    /// The identifier-ish token touching `offset`: letters, digits, and
    /// hyphens. Used for hover/definition where the resolved context
    /// names a *position* but callers need the actual text there.
    #[must_use]
    pub fn word_at_offset(&self, offset: u32) -> String {
        let offset = (offset as usize).min(self.text.len());
        let is_word = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
        let start = self.text[..offset].rfind(|c| !is_word(c)).map_or(0, |i| i + 1);
        let end = self.text[offset..].find(|c| !is_word(c)).map_or(self.text.len(), |i| offset + i);
        self.text.get(start..end).unwrap_or("").trim_start_matches(['@', '.', '?']).to_string()
    }
}

fn parse(manager: &QueryManager, grammar: Grammar, text: &str, old_tree: Option<&Tree>) -> Option<Tree> {
    let mut parser = manager.get_parser(grammar);
    parser.parse(text, old_tree)
}

/// Byte offset to a tree-sitter `Point` (row, byte column within the
/// row) — distinct from [`cem_common::LineMap`], which reports UTF-16
/// columns for the LSP wire format.
fn point_at_byte(text: &str, offset: u32) -> tree_sitter::Point {
    let offset = (offset as usize).min(text.len());
    let mut row = 0usize;
    let mut line_start = 0usize;
    for (i, b) in text.as_bytes()[..offset].iter().enumerate() {
        if *b == b'\n' {
            row += 1;
            line_start = i + 1;
        }
    }
    tree_sitter::Point { row, column: offset - line_start }
}

/// Documents currently open in the client, keyed by URI (§4.J).
///
/// `Open` parses once; `Close` evicts. The store holds at most one tree
/// per document — closing releases it, matching the one-tree-per-open-doc
/// resource policy.
#[derive(Default)]
pub struct DocumentStore {
    documents: DashMap<Uri, Document>,
}

impl DocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, manager: &QueryManager, uri: Uri, text: String, version: i32, language_id: String) {
        self.documents.insert(uri, Document::new(manager, text, version, language_id));
    }

    pub fn replace(&self, manager: &QueryManager, uri: &Uri, text: String, version: i32) {
        if let Some(mut doc) = self.documents.get_mut(uri) {
            doc.replace_text(manager, text, version);
        }
    }

    /// Applies one incremental `{range, text}` change to the document
    /// named by `uri`, in place — see [`Document::apply_change`].
    pub fn apply_change(&self, manager: &QueryManager, uri: &Uri, range: Option<cem_common::Range>, text: String, version: i32) {
        if let Some(mut doc) = self.documents.get_mut(uri) {
            doc.apply_change(manager, range, text, version);
        }
    }

    pub fn close(&self, uri: &Uri) {
        self.documents.remove(uri);
    }

    #[must_use]
    pub fn get(&self, uri: &Uri) -> Option<dashmap::mapref::one::Ref<'_, Uri, Document>> {
        self.documents.get(uri)
    }

    /// All open documents, for workspace-wide operations like
    /// `references` that `cem-lsp` scopes to what's currently open.
    pub fn iter(&self) -> dashmap::iter::Iter<'_, Uri, Document> {
        self.documents.iter()
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
