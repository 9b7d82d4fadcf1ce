//! Parses the two HTML comment metadata forms recognized by the
//! extractor (§4.E): a short free-text form, and a YAML-like
//! `key: value` form with `summary`/`description`/`deprecated` keys.

use cem_common::Deprecated;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentMeta {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Deprecated>,
}

/// `raw` is the comment's inner text, with `<!--`/`-->` already
/// stripped by the caller.
#[must_use]
pub fn parse(raw: &str) -> CommentMeta {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    if !lines.iter().any(|l| key_prefix(l).is_some()) {
        let text = raw.trim();
        return CommentMeta {
            description: if text.is_empty() { None } else { Some(text.to_string()) },
            ..CommentMeta::default()
        };
    }

    let mut meta = CommentMeta::default();
    let mut current: Option<(&'static str, String)> = None;

    let flush = |meta: &mut CommentMeta, current: Option<(&'static str, String)>| {
        let Some((key, value)) = current else { return };
        let value = value.trim().to_string();
        match key {
            "summary" => meta.summary = non_empty(value),
            "description" => meta.description = non_empty(value),
            "deprecated" => {
                meta.deprecated = Some(if value.is_empty() {
                    Deprecated::Bool(true)
                } else {
                    Deprecated::Reason(value)
                });
            }
            _ => {}
        }
    };

    for line in &lines {
        let trimmed = line.trim();
        if let Some((key, rest)) = key_prefix(trimmed) {
            flush(&mut meta, current.take());
            current = Some((key, rest.to_string()));
        } else if let Some((key, body)) = &mut current {
            if body == "|" {
                body.clear();
                body.push_str(trimmed);
            } else {
                body.push('\n');
                body.push_str(trimmed);
            }
            let _ = key;
        } else if !trimmed.is_empty() {
            // A bare word that isn't a recognized key is taken as
            // description text (§4.E).
            flush(&mut meta, current.take());
            current = Some(("description", trimmed.to_string()));
        }
    }
    flush(&mut meta, current.take());

    meta
}

fn key_prefix(line: &str) -> Option<(&'static str, &str)> {
    for key in ["summary", "description", "deprecated"] {
        if let Some(rest) = line.strip_prefix(key) {
            if let Some(rest) = rest.strip_prefix(':') {
                return Some((to_static(key), rest.trim_start()));
            }
        }
    }
    None
}

fn to_static(key: &str) -> &'static str {
    match key {
        "summary" => "summary",
        "description" => "description",
        _ => "deprecated",
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
#[path = "tests/comment_meta.rs"]
mod tests;
