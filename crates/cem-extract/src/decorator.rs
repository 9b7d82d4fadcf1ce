//! Manual parsing of decorator call text (`@customElement('tag-name')`,
//! `@property({ attribute: 'kebab', reflects: true, type: Boolean })`).
//! There's no JS object-literal parser in the workspace's dependency
//! stack, so options are picked out with the same depth-aware,
//! top-level-comma-splitting approach `cem_css::varscan` uses for
//! `var()` argument lists.

use crate::types::PropertyOptions;

/// `@name` or `@name(...)` → `"name"`.
#[must_use]
pub fn decorator_name(raw: &str) -> &str {
    let trimmed = raw.trim().trim_start_matches('@');
    let end = trimmed.find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$')).unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// The first quoted string literal argument of a decorator call, e.g.
/// `@customElement('tag-name')` → `Some("tag-name")`.
#[must_use]
pub fn first_string_arg(raw: &str) -> Option<String> {
    let open = raw.find('(')?;
    let inner = &raw[open + 1..];
    let quote = inner.find(['\'', '"', '`'])?;
    let q = inner.as_bytes()[quote] as char;
    let rest = &inner[quote + 1..];
    let close = rest.find(q)?;
    Some(rest[..close].to_string())
}

/// Parses a `@property({ … })` decorator's argument object into
/// [`PropertyOptions`]. Unrecognized keys (`converter`, `hasChanged`,
/// …) are ignored rather than rejected.
#[must_use]
pub fn parse_property_options(raw: &str) -> PropertyOptions {
    let mut options = PropertyOptions::default();
    let Some(open) = raw.find('{') else {
        return options;
    };
    let Some(close) = matching_close_brace(raw, open) else {
        return options;
    };
    let body = &raw[open + 1..close];

    for (key, value) in object_entries(body) {
        let value = value.trim();
        match key.trim().trim_matches(['\'', '"']) {
            "attribute" => {
                if value.eq_ignore_ascii_case("false") {
                    options.attribute_disabled = true;
                } else if let Some(name) = string_literal(value) {
                    options.attribute_name = Some(name);
                }
            }
            "reflects" | "reflect" => {
                options.reflects = value.eq_ignore_ascii_case("true");
            }
            "type" => {
                // Keeps the constructor reference's own casing ("Boolean",
                // not "boolean") — the type-fallback case with no
                // annotation or initializer surfaces this literally.
                options.type_hint = match value {
                    "Boolean" => Some("Boolean".to_string()),
                    "Number" => Some("Number".to_string()),
                    "String" => Some("String".to_string()),
                    _ => None,
                };
            }
            _ => {}
        }
    }

    options
}

fn string_literal(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let first = *bytes.first()?;
    if !matches!(first, b'\'' | b'"' | b'`') {
        return None;
    }
    let last = *bytes.last()?;
    if last != first {
        return None;
    }
    Some(text[1..text.len() - 1].to_string())
}

fn matching_close_brace(text: &str, open_idx: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0i32;
    for (i, &b) in bytes.iter().enumerate().skip(open_idx) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits an object literal's body on top-level commas, then each entry
/// on its first colon, tracking `{}`/`[]`/`()` depth so nested values
/// (arrays, nested objects, call expressions) aren't split early.
fn object_entries(body: &str) -> Vec<(&str, &str)> {
    let mut entries = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    let bytes = body.as_bytes();

    let mut push_entry = |chunk: &str, entries: &mut Vec<(&str, &str)>| {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return;
        }
        if let Some(colon) = top_level_colon(chunk) {
            entries.push((&chunk[..colon], &chunk[colon + 1..]));
        }
    };

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => depth -= 1,
            b',' if depth == 0 => {
                push_entry(&body[start..i], &mut entries);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_entry(&body[start..], &mut entries);
    entries
}

fn top_level_colon(chunk: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, b) in chunk.bytes().enumerate() {
        match b {
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => depth -= 1,
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/decorator.rs"]
mod tests;
