//! `@example` rendering (§4.B): explicit `<caption>` wins, otherwise any
//! text preceding the first fenced code block becomes the caption; code
//! fences are kept verbatim. Multiple `@example` tags concatenate with a
//! blank line between them.

/// Render one `@example` tag body into a `<figure>` block.
#[must_use]
pub fn render_example(body: &str) -> String {
    let body = body.trim();

    if let Some(after_open) = body.strip_prefix("<caption>") {
        if let Some(end) = after_open.find("</caption>") {
            let caption = after_open[..end].trim();
            let rest = after_open[end + "</caption>".len()..].trim();
            return format!("<figure><figcaption>{caption}</figcaption>\n\n{rest}</figure>");
        }
    }

    if let Some(fence_start) = body.find("```") {
        let before = body[..fence_start].trim();
        if !before.is_empty() {
            let rest = body[fence_start..].trim();
            return format!("<figure><figcaption>{before}</figcaption>\n\n{rest}</figure>");
        }
    }

    format!("<figure>{body}</figure>")
}

/// Concatenates rendered `@example` blocks with a blank line between
/// each, per §4.B.
#[must_use]
pub fn join_examples(rendered: &[String]) -> Option<String> {
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join("\n\n"))
    }
}

#[cfg(test)]
#[path = "tests/examples.rs"]
mod tests;
