//! Locates the block comment immediately preceding a declaration so its
//! raw text (delimiters included) can be handed to [`cem_jsdoc::parse`].

#[derive(Debug, Clone, Copy)]
pub struct CommentSpan {
    pub start: usize,
    pub end: usize,
}

impl CommentSpan {
    #[must_use]
    pub fn span_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Returns the comment ending closest to (but not after) `before_byte`,
/// provided only whitespace separates it from that position. `class`
/// nodes include their own leading decorators, so `before_byte` being
/// the class node's start already accounts for `/** doc */ @dec class
/// Foo` having no non-whitespace text between the comment and the
/// decorator.
#[must_use]
pub fn nearest_preceding<'a>(comments: &'a [CommentSpan], source: &str, before_byte: usize) -> Option<&'a CommentSpan> {
    comments
        .iter()
        .filter(|c| c.end <= before_byte)
        .filter(|c| source.get(c.end..before_byte).is_some_and(|gap| gap.trim().is_empty()))
        .max_by_key(|c| c.end)
}

#[cfg(test)]
#[path = "tests/comments.rs"]
mod tests;
