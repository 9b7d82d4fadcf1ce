//! Finds `var(--name[, fallback])` references inside a declaration's
//! value text, including ones nested in another `var()`'s fallback
//! (§4.D: `var(--_private, var(--public))`).

/// One `var()` invocation. `fallback` is either a nested `var()` call or
/// a literal fallback expression, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarCall {
    pub name: String,
    pub fallback: Fallback,
    /// Byte range of the whole `var(...)` call within the value text
    /// that was scanned.
    pub span: (usize, usize),
    /// The call's own `var(...)` source text, reconstructed from its
    /// parsed parts. Used to render a default value when this call
    /// itself is someone else's fallback.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    None,
    Nested(Box<VarCall>),
    Literal(String),
}

impl VarCall {
    #[must_use]
    pub fn private(&self) -> bool {
        self.name.starts_with("--_")
    }

    /// Walks the fallback chain to the deepest `var()` reference that
    /// isn't private, per §4.D's "comments attach to the innermost
    /// non-private reference".
    #[must_use]
    pub fn innermost_non_private(&self) -> &VarCall {
        if self.private() {
            if let Fallback::Nested(inner) = &self.fallback {
                return inner.innermost_non_private();
            }
        }
        self
    }
}

/// Returns every **top-level** `var()` invocation in `value` — i.e. one
/// entry per `var(` that doesn't start inside another one's
/// parentheses. A call like `var(--_private, var(--public))` is a
/// single top-level entry with a nested fallback, not two.
#[must_use]
pub fn find_top_level_var_calls(value: &str) -> Vec<VarCall> {
    let bytes = value.as_bytes();
    let mut out = Vec::new();
    let mut search_from = 0usize;

    while let Some(rel) = memchr::memmem::find(&bytes[search_from..], b"var(") {
        let start = search_from + rel;
        let open_paren = start + 3;
        match matching_close_paren(value, open_paren) {
            Some(close) => {
                let inner = &value[open_paren + 1..close];
                if let Some(call) = parse_call_body(inner, start, close + 1) {
                    out.push(call);
                }
                search_from = close + 1;
            }
            None => break,
        }
    }

    out
}

fn parse_call_body(inner: &str, call_start: usize, call_end: usize) -> Option<VarCall> {
    let (name_part, rest) = split_top_level_comma(inner);
    let name = name_part.trim().to_string();
    if !name.starts_with("--") {
        return None;
    }

    let fallback = match rest {
        None => Fallback::None,
        Some(rest) => {
            let trimmed = rest.trim();
            if trimmed.starts_with("var(") && matching_close_paren(trimmed, 3).is_some_and(|c| c == trimmed.len() - 1)
            {
                let nested_inner = &trimmed[4..trimmed.len() - 1];
                match parse_call_body(nested_inner, 0, trimmed.len()) {
                    Some(nested) => Fallback::Nested(Box::new(nested)),
                    None => Fallback::Literal(trimmed.to_string()),
                }
            } else {
                Fallback::Literal(trimmed.to_string())
            }
        }
    };

    Some(VarCall {
        raw: format!("var({inner})"),
        name,
        fallback,
        span: (call_start, call_end),
    })
}

/// Finds the index (into `text`) of the `)` matching the `(` at
/// `open_paren_index`.
fn matching_close_paren(text: &str, open_paren_index: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_paren_index) != Some(&b'(') {
        return None;
    }
    let mut depth = 0i32;
    for (i, &b) in bytes.iter().enumerate().skip(open_paren_index) {
        match b {
            b'(' => depth += 1,
            b')' => {
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

/// Splits `text` on the first top-level comma (not nested inside
/// parens), returning `(before, Some(after))`, or `(text, None)` if
/// there's no top-level comma.
fn split_top_level_comma(text: &str) -> (&str, Option<&str>) {
    let mut depth = 0i32;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => return (&text[..i], Some(&text[i + 1..])),
            _ => {}
        }
    }
    (text, None)
}

#[cfg(test)]
#[path = "tests/varscan.rs"]
mod tests;
