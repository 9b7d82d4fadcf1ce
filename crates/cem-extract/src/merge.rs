//! The Merger (§4.G): fuses one class's AST record with its JSDoc, CSS,
//! and HTML-template data into a canonical [`cem_model::ClassDeclaration`].

use cem_css::CssExtractResult;
use cem_html::HtmlExtractResult;
use cem_jsdoc::JsDoc;
use cem_model::{
    Attribute, ClassDeclaration, CssCustomProperty, CssPart, CssState, Demo, Event, Field, Member, Method, Parameter,
    Privacy as ModelPrivacy, Return, Slot, Superclass,
};
use rustc_hash::FxHashMap;

use crate::reactive;
use crate::types::{Privacy as RawPrivacy, RawClass, RawField, RawMethod, RawParameter};

/// Merges one class's raw AST record with its (optional) class-level
/// JSDoc and the CSS/HTML records collected for it.
#[must_use]
pub fn merge_class(
    raw: &RawClass,
    jsdoc: Option<&JsDoc>,
    tag_name: Option<String>,
    superclass: Option<Superclass>,
    mixins: Vec<Superclass>,
    css: &CssExtractResult,
    html: &HtmlExtractResult,
) -> ClassDeclaration {
    let mut class = ClassDeclaration {
        name: raw.name.clone(),
        superclass,
        mixins,
        tag_name,
        ..ClassDeclaration::default()
    };

    // Step 1: class-level description/summary/deprecated.
    if let Some(doc) = jsdoc {
        class.description = doc.description.clone();
        class.summary = doc.summary.clone();
        class.deprecated = doc.deprecated.clone();
    }

    class.members = build_members(raw);

    // Step 2: attributes.
    class.attributes = merge_attributes(raw, jsdoc);

    // Step 3: slots.
    class.slots = merge_slots(html, jsdoc);

    // Step 4: events (JSDoc `@fires` only; no `dispatchEvent` inference).
    class.events = jsdoc
        .map(|d| {
            d.fires
                .iter()
                .map(|tag| Event {
                    name: tag.name.clone(),
                    type_text: tag.type_text.clone(),
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                })
                .collect()
        })
        .unwrap_or_default();

    // Step 5: css custom properties.
    class.css_properties = merge_css_properties(css, jsdoc);

    // Step 6: css parts.
    class.css_parts = merge_css_parts(html, jsdoc);

    // Step 7: css states (JSDoc only).
    class.css_states = jsdoc
        .map(|d| {
            d.css_states
                .iter()
                .map(|tag| CssState {
                    name: tag.name.clone(),
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                })
                .collect()
        })
        .unwrap_or_default();

    // Steps 8+9: demos, with `@alias` slugification applied to relative URLs.
    class.demos = jsdoc
        .map(|d| {
            d.demos
                .iter()
                .map(|tag| Demo {
                    description: tag.description.clone(),
                    url: apply_alias(&tag.url, d.alias.as_deref()),
                })
                .collect()
        })
        .unwrap_or_default();

    class
}

fn build_members(raw: &RawClass) -> Vec<Member> {
    let mut members = Vec::with_capacity(raw.fields.len() + raw.methods.len());
    for field in &raw.fields {
        members.push(Member::Field(build_field(field)));
    }
    for method in &raw.methods {
        members.push(Member::Method(build_method(method)));
    }
    members
}

fn build_field(field: &RawField) -> Field {
    Field {
        name: field.name.clone(),
        is_static: field.is_static,
        privacy: convert_privacy(field.privacy),
        readonly: field.readonly,
        reflects: reactive::infer_reflects(field),
        attribute: reactive::infer_attribute(field),
        type_text: reactive::infer_type(field),
        default: field.initializer.clone(),
        description: None,
        summary: None,
        deprecated: None,
        start_byte: field.start_byte,
    }
}

fn build_method(method: &RawMethod) -> Method {
    Method {
        name: method.name.clone(),
        is_static: method.is_static,
        privacy: convert_privacy(method.privacy),
        parameters: method.parameters.iter().map(build_parameter).collect(),
        return_: method.return_type.clone().map(|t| Return { type_text: Some(t), description: None }),
        description: None,
        summary: None,
        deprecated: None,
        start_byte: method.start_byte,
    }
}

fn build_parameter(param: &RawParameter) -> Parameter {
    Parameter {
        name: param.name.clone(),
        type_text: param.type_text.clone(),
        default: None,
        optional: param.optional,
        rest: param.rest,
        description: None,
        deprecated: None,
    }
}

fn convert_privacy(privacy: RawPrivacy) -> ModelPrivacy {
    match privacy {
        RawPrivacy::Public => ModelPrivacy::Public,
        RawPrivacy::Protected => ModelPrivacy::Protected,
        RawPrivacy::Private => ModelPrivacy::Private,
    }
}

fn merge_attributes(raw: &RawClass, jsdoc: Option<&JsDoc>) -> Vec<Attribute> {
    let mut by_name: FxHashMap<String, Attribute> = FxHashMap::default();

    for field in &raw.fields {
        let Some(attr_name) = reactive::infer_attribute(field) else {
            continue;
        };
        by_name.insert(
            attr_name.clone(),
            Attribute {
                name: attr_name,
                field_name: Some(field.name.clone()),
                type_text: reactive::infer_type(field),
                default: field.initializer.clone(),
                summary: None,
                description: None,
                deprecated: None,
            },
        );
    }

    if let Some(doc) = jsdoc {
        for tag in &doc.attrs {
            by_name
                .entry(tag.name.clone())
                .and_modify(|existing| {
                    existing.type_text = existing.type_text.clone().or_else(|| tag.type_text.clone());
                    existing.description = existing.description.clone().or_else(|| tag.description.clone());
                })
                .or_insert_with(|| Attribute {
                    name: tag.name.clone(),
                    field_name: None,
                    type_text: tag.type_text.clone(),
                    default: None,
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                });
        }
    }

    by_name.into_values().collect()
}

fn merge_slots(html: &HtmlExtractResult, jsdoc: Option<&JsDoc>) -> Vec<Slot> {
    let mut by_name: FxHashMap<String, Slot> = FxHashMap::default();
    for slot in &html.slots {
        by_name.insert(
            slot.name.clone(),
            Slot {
                name: slot.name.clone(),
                summary: slot.summary.clone(),
                description: slot.description.clone(),
                deprecated: slot.deprecated.clone(),
            },
        );
    }
    if let Some(doc) = jsdoc {
        for tag in &doc.slots {
            by_name
                .entry(tag.name.clone())
                .and_modify(|existing| {
                    existing.description = existing.description.clone().or_else(|| tag.description.clone());
                })
                .or_insert_with(|| Slot {
                    name: tag.name.clone(),
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                });
        }
    }
    by_name.into_values().collect()
}

fn merge_css_parts(html: &HtmlExtractResult, jsdoc: Option<&JsDoc>) -> Vec<CssPart> {
    let mut by_name: FxHashMap<String, CssPart> = FxHashMap::default();
    for part in &html.parts {
        by_name.insert(
            part.name.clone(),
            CssPart {
                name: part.name.clone(),
                summary: part.summary.clone(),
                description: part.description.clone(),
                deprecated: part.deprecated.clone(),
            },
        );
    }
    if let Some(doc) = jsdoc {
        for tag in &doc.css_parts {
            by_name
                .entry(tag.name.clone())
                .and_modify(|existing| {
                    existing.description = existing.description.clone().or_else(|| tag.description.clone());
                })
                .or_insert_with(|| CssPart {
                    name: tag.name.clone(),
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                });
        }
    }
    by_name.into_values().collect()
}

fn merge_css_properties(css: &CssExtractResult, jsdoc: Option<&JsDoc>) -> Vec<CssCustomProperty> {
    let mut by_name: FxHashMap<String, CssCustomProperty> = FxHashMap::default();
    for prop in &css.properties {
        by_name.insert(
            prop.name.clone(),
            CssCustomProperty {
                name: prop.name.clone(),
                syntax: prop.syntax.clone(),
                default: prop.default.clone(),
                summary: prop.summary.clone(),
                description: prop.description.clone(),
                deprecated: prop.deprecated.clone(),
                start_byte: prop.start_byte,
            },
        );
    }
    if let Some(doc) = jsdoc {
        for tag in &doc.css_props {
            by_name
                .entry(tag.name.clone())
                .and_modify(|existing| {
                    existing.syntax = existing.syntax.clone().or_else(|| tag.syntax.clone());
                    existing.description = existing.description.clone().or_else(|| tag.description.clone());
                })
                .or_insert_with(|| CssCustomProperty {
                    name: tag.name.clone(),
                    syntax: tag.syntax.clone(),
                    default: None,
                    summary: None,
                    description: tag.description.clone(),
                    deprecated: None,
                    start_byte: u32::MAX,
                });
        }
    }
    by_name.into_values().collect()
}

/// Step 9: a relative demo URL is prefixed with the element's `@alias`
/// slug (already lowercased/hyphen-collapsed by `cem_jsdoc::slug`);
/// URLs that already carry a scheme are left untouched.
fn apply_alias(url: &str, alias: Option<&str>) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    let Some(alias) = alias else {
        return url.to_string();
    };
    let trimmed = url.trim_start_matches("./");
    format!("{alias}/{trimmed}")
}

#[cfg(test)]
#[path = "tests/merge.rs"]
mod tests;
