//! Locates the `/** … */` (or `/* … */`) comment immediately preceding
//! a declaration, and normalizes its text to single-spaced prose.

/// A comment's byte span within the source that was parsed.
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
/// provided only whitespace separates the comment from that position —
/// i.e. it's truly adjacent, not just somewhere earlier in the file.
#[must_use]
pub fn nearest_preceding<'a>(comments: &'a [CommentSpan], source: &str, before_byte: usize) -> Option<&'a CommentSpan> {
    comments
        .iter()
        .filter(|c| c.end <= before_byte)
        .filter(|c| source.get(c.end..before_byte).is_some_and(|gap| gap.trim().is_empty()))
        .max_by_key(|c| c.end)
}

/// Strips `/*`, `*/`, and leading ` * ` line decoration, collapsing the
/// body to single-spaced prose, mirroring how `cem_jsdoc::text` treats
/// block comments.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let inner = raw.trim().trim_start_matches("/**").trim_start_matches("/*").trim_end_matches("*/");

    let words: Vec<&str> = inner
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .flat_map(str::split_whitespace)
        .collect();

    words.join(" ")
}

#[cfg(test)]
#[path = "tests/comments.rs"]
mod tests;
