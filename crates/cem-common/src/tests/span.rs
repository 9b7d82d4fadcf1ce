use super::*;

#[test]
fn contains_is_half_open() {
    let span = Span::new(4, 8);
    assert!(span.contains(4));
    assert!(span.contains(7));
    assert!(!span.contains(8));
}

#[test]
fn merge_takes_outer_bounds() {
    let a = Span::new(2, 5);
    let b = Span::new(4, 9);
    assert_eq!(a.merge(b), Span::new(2, 9));
}

#[test]
fn slice_clamps_out_of_range() {
    let span = Span::new(0, 100);
    assert_eq!(span.slice("abc"), "abc");
}

#[test]
fn dummy_span_is_recognized() {
    assert!(Span::dummy().is_dummy());
    assert!(!Span::new(0, 1).is_dummy());
}
