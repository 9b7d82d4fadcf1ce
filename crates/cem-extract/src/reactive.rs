//! Reactive-property inference and the type-inference fallback (§4.F).

use crate::types::RawField;

/// The attribute name a reactive field is backed by, or `None` if it
/// isn't attribute-backed at all.
#[must_use]
pub fn infer_attribute(field: &RawField) -> Option<String> {
    let options = field.property_options.as_ref()?;
    if options.attribute_disabled {
        return None;
    }
    if let Some(name) = &options.attribute_name {
        return Some(name.clone());
    }
    if field.is_static {
        return None;
    }
    Some(field.name.to_lowercase())
}

/// `reflects: true` only matters for an attribute-backed, non-static
/// field (§4.F).
#[must_use]
pub fn infer_reflects(field: &RawField) -> bool {
    let Some(options) = &field.property_options else {
        return false;
    };
    options.reflects && !field.is_static && infer_attribute(field).is_some()
}

/// Resolves a field's manifest type: an explicit annotation wins, then
/// the decorator's `type:` option, then a literal-initializer fallback.
#[must_use]
pub fn infer_type(field: &RawField) -> Option<String> {
    if let Some(annotated) = &field.type_text {
        return Some(annotated.clone());
    }
    if let Some(hint) = field.property_options.as_ref().and_then(|o| o.type_hint.clone()) {
        return Some(hint);
    }
    field.initializer.as_deref().and_then(literal_type_fallback)
}

/// `true|false` → `boolean`, a decimal numeric literal → `number`, a
/// quoted string → `string`. Anything else (object/array/call
/// expressions, `null`, `undefined`) is left unresolved (§4.F).
#[must_use]
pub fn literal_type_fallback(initializer: &str) -> Option<String> {
    let trimmed = initializer.trim();
    if trimmed == "true" || trimmed == "false" {
        return Some("boolean".to_string());
    }
    if is_decimal_number(trimmed) {
        return Some("number".to_string());
    }
    if is_quoted_string(trimmed) {
        return Some("string".to_string());
    }
    None
}

fn is_decimal_number(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let text = text.strip_prefix('-').unwrap_or(text);
    if text.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    for c in text.chars() {
        if c == '.' && !seen_dot {
            seen_dot = true;
            continue;
        }
        if !c.is_ascii_digit() {
            return false;
        }
    }
    true
}

fn is_quoted_string(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2
        && matches!(bytes[0], b'\'' | b'"')
        && bytes[bytes.len() - 1] == bytes[0]
}

#[cfg(test)]
#[path = "tests/reactive.rs"]
mod tests;
