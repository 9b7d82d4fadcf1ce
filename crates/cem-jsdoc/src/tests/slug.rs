use super::*;

#[test]
fn spaces_and_parens_become_hyphens() {
    assert_eq!(slugify("Button (primary)"), "button-primary");
}

#[test]
fn repeated_hyphens_collapse() {
    assert_eq!(slugify("a -- b"), "a-b");
}

#[test]
fn trailing_hyphen_is_trimmed() {
    assert_eq!(slugify("Demo (1)"), "demo-1");
}
