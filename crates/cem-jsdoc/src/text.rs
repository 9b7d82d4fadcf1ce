//! Comment-text normalization shared by every tag parser.

/// Strips the `/** … */` delimiters (if present) and the leading ` * `
/// on every line, the same normalization `tsz-common::comments` applies
/// before comments are attached to AST nodes.
#[must_use]
pub fn normalize_block_comment(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .unwrap_or(trimmed);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    inner
        .lines()
        .map(strip_leading_star)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

fn strip_leading_star(line: &str) -> &str {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("* ") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix('*') {
        rest
    } else {
        trimmed
    }
}

/// Splits a leading `{type}` annotation off a tag body, if present.
/// Returns `(type_text, remainder)`.
#[must_use]
pub fn split_type_annotation(body: &str) -> (Option<String>, &str) {
    let body = body.trim_start();
    if let Some(rest) = body.strip_prefix('{') {
        if let Some(end) = rest.find('}') {
            let type_text = rest[..end].trim().to_string();
            return (Some(type_text), rest[end + 1..].trim_start());
        }
    }
    (None, body)
}

/// Splits `name - description` / `name` forms. The dash must be
/// surrounded by whitespace to avoid eating hyphenated names.
#[must_use]
pub fn split_name_and_description(body: &str) -> (&str, Option<String>) {
    let body = body.trim();
    if let Some(idx) = find_description_separator(body) {
        let name = body[..idx].trim();
        let description = body[idx..].trim_start_matches('-').trim();
        (name, if description.is_empty() { None } else { Some(description.to_string()) })
    } else if let Some((name, rest)) = body.split_once(char::is_whitespace) {
        let rest = rest.trim();
        (name, if rest.is_empty() { None } else { Some(rest.to_string()) })
    } else {
        (body, None)
    }
}

fn find_description_separator(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b' ' && bytes[i + 1] == b'-' && (i + 2 == bytes.len() || bytes[i + 2] == b' ') {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}
