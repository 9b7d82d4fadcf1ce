use super::*;

#[test]
fn decorator_name_strips_at_and_args() {
    assert_eq!(decorator_name("@customElement('my-el')"), "customElement");
    assert_eq!(decorator_name("@property"), "property");
}

#[test]
fn first_string_arg_reads_tag_name() {
    assert_eq!(first_string_arg("@customElement('my-el')"), Some("my-el".to_string()));
    assert_eq!(first_string_arg(r#"@customElement("my-el")"#), Some("my-el".to_string()));
}

#[test]
fn property_options_parses_attribute_name() {
    let options = parse_property_options("@property({ attribute: 'my-name', reflects: true })");
    assert_eq!(options.attribute_name.as_deref(), Some("my-name"));
    assert!(options.reflects);
    assert!(!options.attribute_disabled);
}

#[test]
fn property_options_attribute_false_disables() {
    let options = parse_property_options("@property({ attribute: false })");
    assert!(options.attribute_disabled);
    assert!(options.attribute_name.is_none());
}

#[test]
fn property_options_type_hint_keeps_constructor_name_casing() {
    assert_eq!(parse_property_options("@property({ type: Boolean })").type_hint.as_deref(), Some("Boolean"));
    assert_eq!(parse_property_options("@property({ type: Number })").type_hint.as_deref(), Some("Number"));
    assert_eq!(parse_property_options("@property({ type: String })").type_hint.as_deref(), Some("String"));
}

#[test]
fn property_options_ignores_unknown_keys() {
    let options = parse_property_options("@property({ converter: fooConverter, hasChanged: () => true })");
    assert!(options.attribute_name.is_none());
    assert!(!options.reflects);
}

#[test]
fn bare_property_decorator_has_no_options() {
    let options = parse_property_options("@property()");
    assert_eq!(options, crate::types::PropertyOptions::default());
}
