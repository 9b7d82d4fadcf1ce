//! `@alias` slugification (§4.B, §4.G step 9): lowercase, strip spaces
//! and parentheses, collapse repeated hyphens.

#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_hyphen = false;
    for ch in text.chars() {
        match ch {
            ' ' | '(' | ')' => {
                if !last_was_hyphen && !out.is_empty() {
                    out.push('-');
                    last_was_hyphen = true;
                }
            }
            '-' => {
                if !last_was_hyphen && !out.is_empty() {
                    out.push('-');
                    last_was_hyphen = true;
                }
            }
            _ => {
                out.push(ch.to_ascii_lowercase());
                last_was_hyphen = false;
            }
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
