use super::*;

#[test]
fn single_var_with_no_fallback() {
    let calls = find_top_level_var_calls("var(--x)");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "--x");
    assert_eq!(calls[0].fallback, Fallback::None);
}

#[test]
fn single_var_with_literal_fallback() {
    let calls = find_top_level_var_calls("var(--x, 4px)");
    assert_eq!(calls[0].fallback, Fallback::Literal("4px".to_string()));
}

#[test]
fn nested_var_is_one_top_level_call() {
    let calls = find_top_level_var_calls("var(--_private, var(--public))");
    assert_eq!(calls.len(), 1);
    let outer = &calls[0];
    assert_eq!(outer.name, "--_private");
    match &outer.fallback {
        Fallback::Nested(inner) => assert_eq!(inner.name, "--public"),
        other => panic!("expected nested fallback, got {other:?}"),
    }
}

#[test]
fn innermost_non_private_skips_private_wrapper() {
    let calls = find_top_level_var_calls("var(--_private, var(--public, 1px))");
    let innermost = calls[0].innermost_non_private();
    assert_eq!(innermost.name, "--public");
}

#[test]
fn innermost_non_private_is_self_when_already_public() {
    let calls = find_top_level_var_calls("var(--public, 1px)");
    assert_eq!(calls[0].innermost_non_private().name, "--public");
}

#[test]
fn two_sibling_var_calls_are_both_top_level() {
    let calls = find_top_level_var_calls("var(--a) var(--b)");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].name, "--a");
    assert_eq!(calls[1].name, "--b");
}

#[test]
fn non_custom_property_function_calls_are_ignored() {
    let calls = find_top_level_var_calls("calc(1px + 2px)");
    assert!(calls.is_empty());
}
