//! Splits a normalized comment body into the implicit description block
//! plus one segment per `@tag`.

pub struct TagSegment {
    pub tag: String,
    pub body: String,
}

#[must_use]
pub fn segment(normalized: &str) -> (String, Vec<TagSegment>) {
    let mut description_lines: Vec<&str> = Vec::new();
    let mut segments: Vec<(&str, Vec<&str>)> = Vec::new();

    for line in normalized.lines() {
        if let Some((tag, rest)) = split_tag_line(line) {
            segments.push((tag, vec![rest]));
        } else if let Some((_, lines)) = segments.last_mut() {
            lines.push(line);
        } else {
            description_lines.push(line);
        }
    }

    let description = description_lines.join("\n").trim().to_string();
    let tag_segments = segments
        .into_iter()
        .map(|(tag, lines)| TagSegment {
            tag: tag.to_string(),
            body: lines.join("\n").trim().to_string(),
        })
        .collect();

    (description, tag_segments)
}

/// Splits a line starting with `@tagname` into `(tagname, rest-of-line)`.
fn split_tag_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix('@')?;
    let name_end = rest.find(|c: char| c.is_whitespace()).unwrap_or(rest.len());
    if name_end == 0 {
        return None;
    }
    let tag = &rest[..name_end];
    let remainder = rest[name_end..].trim_start();
    Some((tag, remainder))
}

#[cfg(test)]
#[path = "tests/segment.rs"]
mod tests;
