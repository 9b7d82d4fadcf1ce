use super::*;

#[test]
fn leading_text_becomes_description() {
    let (description, tags) = segment("A button.\n@attr variant - the variant");
    assert_eq!(description, "A button.");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].tag, "attr");
    assert_eq!(tags[0].body, "variant - the variant");
}

#[test]
fn multiline_tag_body_is_joined() {
    let (_, tags) = segment("@example\nline one\nline two");
    assert_eq!(tags[0].body, "line one\nline two");
}

#[test]
fn bare_tag_with_no_body_has_empty_body() {
    let (_, tags) = segment("@deprecated");
    assert_eq!(tags[0].body, "");
}
