use super::*;

#[test]
fn short_form_is_verbatim_description() {
    let meta = parse("an icon slot");
    assert_eq!(meta.description.as_deref(), Some("an icon slot"));
    assert_eq!(meta.summary, None);
}

#[test]
fn yaml_like_single_line_keys() {
    let meta = parse("summary: Icon slot\ndescription: Shows a leading icon");
    assert_eq!(meta.summary.as_deref(), Some("Icon slot"));
    assert_eq!(meta.description.as_deref(), Some("Shows a leading icon"));
}

#[test]
fn yaml_like_deprecated_without_reason_is_bool_true() {
    let meta = parse("deprecated:\ndescription: old slot");
    assert_eq!(meta.deprecated, Some(cem_common::Deprecated::Bool(true)));
}

#[test]
fn yaml_like_deprecated_with_reason() {
    let meta = parse("deprecated: use icon-slot instead");
    assert_eq!(
        meta.deprecated,
        Some(cem_common::Deprecated::Reason("use icon-slot instead".to_string()))
    );
}

#[test]
fn multiline_block_scalar_is_joined_with_newlines() {
    let meta = parse("description: |\n  first line\n  second line");
    assert_eq!(meta.description.as_deref(), Some("first line\nsecond line"));
}

#[test]
fn bare_word_without_colon_is_description() {
    let meta = parse("just some text\nsummary: real summary");
    assert_eq!(meta.description.as_deref(), Some("just some text"));
    assert_eq!(meta.summary.as_deref(), Some("real summary"));
}
