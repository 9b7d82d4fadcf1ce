use super::*;

#[test]
fn identical_strings_have_zero_distance() {
    assert_eq!(distance("label", "label"), 0);
}

#[test]
fn one_extra_character_has_distance_one() {
    assert_eq!(distance("labels", "label"), 1);
}

#[test]
fn transposed_letters_have_distance_two() {
    assert_eq!(distance("lable", "label"), 2);
}

#[test]
fn closest_picks_the_nearest_within_budget() {
    let candidates = ["label-text", "disabled", "open"];
    assert_eq!(closest("labl-text", candidates.into_iter(), 3), Some("label-text"));
}

#[test]
fn closest_returns_none_when_nothing_is_within_budget() {
    let candidates = ["disabled", "open"];
    assert_eq!(closest("label-text", candidates.into_iter(), 3), None);
}
