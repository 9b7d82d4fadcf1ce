use cem_css::{CssCustomProperty as CssProp, CssExtractResult};
use cem_html::{HtmlExtractResult, HtmlSlot};
use cem_jsdoc::{AttrTag, CssPropTag, DemoTag, JsDoc, SlotTag};

use super::*;
use crate::types::{PropertyOptions, RawClass, RawField};

fn field(name: &str, attribute: &str, type_text: Option<&str>) -> RawField {
    RawField {
        name: name.to_string(),
        property_options: Some(PropertyOptions { attribute_name: Some(attribute.to_string()), ..PropertyOptions::default() }),
        type_text: type_text.map(str::to_string),
        ..RawField::default()
    }
}

#[test]
fn ast_attribute_type_wins_but_jsdoc_fills_description() {
    let raw = RawClass { name: "MyButton".to_string(), fields: vec![field("variant", "variant", Some("string"))], ..RawClass::default() };
    let jsdoc = JsDoc {
        attrs: vec![AttrTag { name: "variant".to_string(), type_text: Some("'a' | 'b'".to_string()), description: Some("Visual style".to_string()) }],
        ..JsDoc::default()
    };
    let class = merge_class(&raw, Some(&jsdoc), None, None, Vec::new(), &CssExtractResult::default(), &HtmlExtractResult::default());

    let attr = class.attributes.iter().find(|a| a.name == "variant").expect("attribute present");
    assert_eq!(attr.type_text.as_deref(), Some("string"));
    assert_eq!(attr.description.as_deref(), Some("Visual style"));
    assert_eq!(attr.field_name.as_deref(), Some("variant"));
}

#[test]
fn jsdoc_only_attribute_is_included_without_a_field_name() {
    let raw = RawClass::default();
    let jsdoc = JsDoc {
        attrs: vec![AttrTag { name: "role".to_string(), type_text: Some("string".to_string()), description: None }],
        ..JsDoc::default()
    };
    let class = merge_class(&raw, Some(&jsdoc), None, None, Vec::new(), &CssExtractResult::default(), &HtmlExtractResult::default());
    let attr = class.attributes.iter().find(|a| a.name == "role").expect("attribute present");
    assert!(attr.field_name.is_none());
}

#[test]
fn slots_dedupe_by_name_and_jsdoc_fills_empty_description() {
    let html = HtmlExtractResult { slots: vec![HtmlSlot { name: "icon".to_string(), summary: None, description: None, deprecated: None }], parts: Vec::new() };
    let jsdoc = JsDoc { slots: vec![SlotTag { name: "icon".to_string(), description: Some("Leading icon".to_string()) }], ..JsDoc::default() };
    let class = merge_class(&RawClass::default(), Some(&jsdoc), None, None, Vec::new(), &CssExtractResult::default(), &html);
    assert_eq!(class.slots.len(), 1);
    assert_eq!(class.slots[0].description.as_deref(), Some("Leading icon"));
}

#[test]
fn css_properties_merge_keeps_css_default_and_fills_jsdoc_syntax() {
    let css = CssExtractResult {
        properties: vec![CssProp {
            name: "--color".to_string(),
            syntax: None,
            default: Some("blue".to_string()),
            summary: None,
            description: None,
            deprecated: None,
            start_byte: 0,
        }],
    };
    let jsdoc = JsDoc {
        css_props: vec![CssPropTag { name: "--color".to_string(), syntax: Some("<color>".to_string()), description: None }],
        ..JsDoc::default()
    };
    let class = merge_class(&RawClass::default(), Some(&jsdoc), None, None, Vec::new(), &css, &HtmlExtractResult::default());
    let prop = class.css_properties.iter().find(|p| p.name == "--color").expect("property present");
    assert_eq!(prop.default.as_deref(), Some("blue"));
    assert_eq!(prop.syntax.as_deref(), Some("<color>"));
}

#[test]
fn relative_demo_url_is_prefixed_with_alias_slug() {
    let jsdoc = JsDoc {
        alias: Some("my-button".to_string()),
        demos: vec![DemoTag { url: "./demo/index.html".to_string(), description: None }],
        ..JsDoc::default()
    };
    let class = merge_class(&RawClass::default(), Some(&jsdoc), None, None, Vec::new(), &CssExtractResult::default(), &HtmlExtractResult::default());
    assert_eq!(class.demos[0].url, "my-button/demo/index.html");
}

#[test]
fn absolute_demo_url_is_untouched() {
    let jsdoc = JsDoc {
        alias: Some("my-button".to_string()),
        demos: vec![DemoTag { url: "https://example.com/demo".to_string(), description: None }],
        ..JsDoc::default()
    };
    let class = merge_class(&RawClass::default(), Some(&jsdoc), None, None, Vec::new(), &CssExtractResult::default(), &HtmlExtractResult::default());
    assert_eq!(class.demos[0].url, "https://example.com/demo");
}
