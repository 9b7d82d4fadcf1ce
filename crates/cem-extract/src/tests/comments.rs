use super::*;

#[test]
fn adjacent_comment_is_found() {
    let source = "/** doc */\nclass Foo {}\n";
    let comment_end = source.find("*/").unwrap() + 2;
    let spans = vec![CommentSpan { start: 0, end: comment_end }];
    let class_start = source.find("class").unwrap();
    let found = nearest_preceding(&spans, source, class_start).expect("comment found");
    assert_eq!(found.span_text(source), "/** doc */");
}

#[test]
fn comment_separated_by_other_code_is_ignored() {
    let source = "/** doc */\nconst x = 1;\nclass Foo {}\n";
    let comment_end = source.find("*/").unwrap() + 2;
    let spans = vec![CommentSpan { start: 0, end: comment_end }];
    let class_start = source.find("class").unwrap();
    assert!(nearest_preceding(&spans, source, class_start).is_none());
}

#[test]
fn comment_before_decorator_is_still_adjacent() {
    let source = "/** doc */\n@customElement('x-foo')\nclass Foo {}\n";
    let comment_end = source.find("*/").unwrap() + 2;
    let spans = vec![CommentSpan { start: 0, end: comment_end }];
    // The class node's start byte includes its leading decorator.
    let node_start = source.find('@').unwrap();
    let found = nearest_preceding(&spans, source, node_start).expect("comment found");
    assert_eq!(found.span_text(source), "/** doc */");
}
