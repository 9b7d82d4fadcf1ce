use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;

use super::*;
use crate::imports::ImportBinding;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("extract queries compile")
}

fn only_class(source: &str, imports: &FxHashMap<String, ImportBinding>) -> ExtractedClass {
    let manager = manager();
    let mut classes = discover_classes(&manager, Grammar::TypeScript, source, imports);
    assert_eq!(classes.len(), 1, "expected exactly one class in: {source}");
    classes.remove(0)
}

#[test]
fn class_name_and_doc_comment_are_captured() {
    let source = "/**\n * A button.\n */\nclass MyButton extends HTMLElement {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert_eq!(class.raw.name, "MyButton");
    assert!(class.raw.doc_comment.as_deref().unwrap().contains("A button."));
}

#[test]
fn export_default_is_detected() {
    let source = "export default class MyButton extends HTMLElement {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert!(class.raw.is_exported);
    assert!(class.raw.is_default_export);
}

#[test]
fn named_export_is_not_default() {
    let source = "export class MyButton extends HTMLElement {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert!(class.raw.is_exported);
    assert!(!class.raw.is_default_export);
}

#[test]
fn custom_element_decorator_sets_tag_name() {
    let source = "@customElement('my-button')\nclass MyButton extends HTMLElement {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert_eq!(class.raw.tag_name.as_deref(), Some("my-button"));
}

#[test]
fn mixin_application_splits_superclass_and_mixins() {
    let source = "class MyButton extends Mixin(HTMLElement) {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert_eq!(class.raw.superclass_name.as_deref(), Some("HTMLElement"));
    assert_eq!(class.raw.mixin_names, vec!["Mixin".to_string()]);
}

#[test]
fn chained_mixins_are_all_recorded() {
    let source = "class MyButton extends A(B(HTMLElement)) {}\n";
    let class = only_class(source, &FxHashMap::default());
    assert_eq!(class.raw.superclass_name.as_deref(), Some("HTMLElement"));
    assert_eq!(class.raw.mixin_names, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn field_modifiers_are_captured() {
    let source = "class MyButton {\n  private readonly label: string = 'go';\n}\n";
    let class = only_class(source, &FxHashMap::default());
    let field = class.raw.fields.iter().find(|f| f.name == "label").expect("field found");
    assert_eq!(field.privacy, Privacy::Private);
    assert!(field.readonly);
    assert_eq!(field.type_text.as_deref(), Some("string"));
    assert_eq!(field.initializer.as_deref(), Some("'go'"));
}

#[test]
fn property_decorator_is_attached_to_its_field() {
    let source = "class MyButton {\n  @property({ attribute: 'is-open', reflects: true })\n  open = false;\n}\n";
    let class = only_class(source, &FxHashMap::default());
    let field = class.raw.fields.iter().find(|f| f.name == "open").expect("field found");
    let options = field.property_options.as_ref().expect("decorator options present");
    assert_eq!(options.attribute_name.as_deref(), Some("is-open"));
    assert!(options.reflects);
}

#[test]
fn accessor_pair_collapses_to_one_writable_field() {
    let source = "class MyButton {\n  get label() { return this._label; }\n  set label(v) { this._label = v; }\n}\n";
    let class = only_class(source, &FxHashMap::default());
    let labels: Vec<_> = class.raw.fields.iter().filter(|f| f.name == "label").collect();
    assert_eq!(labels.len(), 1);
    assert!(labels[0].writable);
}

#[test]
fn getter_only_accessor_is_not_writable() {
    let source = "class MyButton {\n  get label() { return 'x'; }\n}\n";
    let class = only_class(source, &FxHashMap::default());
    let field = class.raw.fields.iter().find(|f| f.name == "label").expect("field found");
    assert!(!field.writable);
}

#[test]
fn excluded_static_fields_produce_no_field_record() {
    let source = "class MyButton {\n  static formAssociated = true;\n  static shadowRootOptions = { mode: 'open' };\n}\n";
    let class = only_class(source, &FxHashMap::default());
    assert!(class.raw.fields.iter().all(|f| f.name != "formAssociated" && f.name != "shadowRootOptions"));
}

#[test]
fn static_styles_tagged_template_becomes_style_binding() {
    let source = "class MyButton {\n  static styles = css`:host { display: block; }`;\n}\n";
    let class = only_class(source, &FxHashMap::default());
    assert_eq!(class.styles.len(), 1);
    match &class.styles[0] {
        StyleBinding::TaggedTemplate { raw_css } => assert!(raw_css.contains(":host")),
        _ => panic!("expected a tagged-template style binding"),
    }
}

#[test]
fn static_styles_referencing_css_import_becomes_external_binding() {
    let mut imports = FxHashMap::default();
    imports.insert("styles".to_string(), ImportBinding { specifier: "./my-button.css".to_string(), imported_name: None });
    let source = "class MyButton {\n  static styles = styles;\n}\n";
    let class = only_class(source, &imports);
    assert_eq!(class.styles.len(), 1);
    match &class.styles[0] {
        StyleBinding::ExternalFile { specifier } => assert_eq!(specifier, "./my-button.css"),
        _ => panic!("expected an external style binding"),
    }
}

#[test]
fn constructor_parameter_property_becomes_a_field() {
    let source = "class MyButton {\n  constructor(private label: string) {\n    super();\n  }\n}\n";
    let class = only_class(source, &FxHashMap::default());
    let field = class.raw.fields.iter().find(|f| f.name == "label").expect("parameter property became a field");
    assert_eq!(field.privacy, Privacy::Private);
    assert_eq!(field.type_text.as_deref(), Some("string"));
}
