//! Class discovery, field/method/accessor discovery, heritage (mixin
//! chain) parsing, and style-binding collection — all of §4.F except
//! reactive-property inference (kept separate in [`crate::reactive`],
//! since it only needs a field's decorator options, not tree nodes).

use cem_query::{Grammar, QueryManager};
use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::comments::{self, CommentSpan};
use crate::decorator;
use crate::imports::ImportBinding;
use crate::queries;
use crate::types::{ExtractedClass, Privacy, RawClass, RawField, RawMethod, RawParameter, StyleBinding};

/// Static class fields that are implementation details of the custom
/// elements reactive-update machinery, never manifest-worthy (§4.F).
const EXCLUDED_STATIC_FIELDS: &[&str] = &["formAssociated", "styles", "shadowRootOptions"];

#[must_use]
pub fn discover_classes(
    manager: &QueryManager,
    grammar: Grammar,
    source: &str,
    imports: &FxHashMap<String, ImportBinding>,
) -> Vec<ExtractedClass> {
    let mut out = Vec::new();

    let Some(class_matcher) = manager.get_matcher(grammar, queries::CLASS_DECL) else {
        return out;
    };
    let Some(comment_matcher) = manager.get_matcher(grammar, queries::COMMENT) else {
        return out;
    };

    let mut parser = manager.get_parser(grammar);
    let Some(tree) = parser.parse(source, None) else {
        return out;
    };
    drop(parser);
    let root = tree.root_node();

    let comment_spans: Vec<CommentSpan> = comment_matcher
        .all_matches(root, source)
        .into_iter()
        .filter_map(|m| m.get("comment").and_then(|v| v.first()).copied())
        .map(|c| CommentSpan {
            start: c.node.start_byte(),
            end: c.node.end_byte(),
        })
        .collect();

    for captures in class_matcher.all_matches(root, source) {
        let Some(class_cap) = captures.get("class").and_then(|v| v.first()) else {
            continue;
        };
        out.push(extract_one_class(class_cap.node, source, &comment_spans, imports));
    }

    out
}

fn extract_one_class(node: Node, source: &str, comment_spans: &[CommentSpan], imports: &FxHashMap<String, ImportBinding>) -> ExtractedClass {
    let mut raw = RawClass {
        start_byte: node.start_byte() as u32,
        ..RawClass::default()
    };

    raw.doc_comment = comments::nearest_preceding(comment_spans, source, node.start_byte())
        .map(|c| c.span_text(source).to_string());

    if let Some(name_node) = node.child_by_field_name("name") {
        raw.name = text(name_node, source).to_string();
    }

    let (is_exported, is_default) = export_status(node);
    raw.is_exported = is_exported;
    raw.is_default_export = is_default;

    let mut cursor = node.walk();
    for decorator_node in node.children(&mut cursor).filter(|c| c.kind() == "decorator") {
        let raw_text = text(decorator_node, source);
        if decorator::decorator_name(raw_text) == "customElement" {
            raw.tag_name = decorator::first_string_arg(raw_text);
        }
    }

    if let Some(heritage) = find_child_of_kind(node, "class_heritage") {
        if let Some(extends) = find_child_of_kind(heritage, "extends_clause") {
            if let Some(value) = extends.child_by_field_name("value") {
                let mut mixins = Vec::new();
                let base = parse_heritage_expr(value, source, &mut mixins);
                raw.superclass_name = non_empty(base);
                raw.mixin_names = mixins;
            }
        }
    }

    let mut styles = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        scan_members(body, source, &mut raw, &mut styles, imports);
    }

    ExtractedClass { raw, styles }
}

/// `export class Foo` / `export default class Foo`. The class
/// declaration may be wrapped by an `export_statement` parent.
fn export_status(class_node: Node) -> (bool, bool) {
    let Some(parent) = class_node.parent() else {
        return (false, false);
    };
    if parent.kind() != "export_statement" {
        return (false, false);
    }
    let mut cursor = parent.walk();
    let is_default = parent.children(&mut cursor).any(|c| c.kind() == "default");
    (true, is_default)
}

/// Walks a heritage expression, peeling off mixin-applying call
/// expressions (`Mixin(Base)`) until a bare identifier/member
/// expression remains. Mixins are recorded outermost-first, matching
/// the order they read left-to-right in source.
fn parse_heritage_expr(expr: Node, source: &str, mixins: &mut Vec<String>) -> String {
    if expr.kind() == "call_expression" {
        let func_name = expr
            .child_by_field_name("function")
            .map(|f| text(f, source).to_string())
            .unwrap_or_default();
        if !func_name.is_empty() {
            mixins.push(func_name);
        }
        if let Some(args) = expr.child_by_field_name("arguments") {
            let mut cursor = args.walk();
            if let Some(first_arg) = args.named_children(&mut cursor).next() {
                return parse_heritage_expr(first_arg, source, mixins);
            }
        }
        return String::new();
    }
    text(expr, source).to_string()
}

fn scan_members(
    body: Node,
    source: &str,
    raw: &mut RawClass,
    styles: &mut Vec<StyleBinding>,
    imports: &FxHashMap<String, ImportBinding>,
) {
    let mut accessors: Vec<AccessorAccum> = Vec::new();
    let mut cursor = body.walk();

    for member in body.children(&mut cursor) {
        match member.kind() {
            "public_field_definition" => {
                scan_field(member, source, raw, styles, imports);
            }
            "method_definition" => {
                scan_method(member, source, raw, &mut accessors);
            }
            _ => {}
        }
    }

    for accum in accessors {
        raw.fields.push(accum.into_field());
    }
}

fn scan_field(
    node: Node,
    source: &str,
    raw: &mut RawClass,
    styles: &mut Vec<StyleBinding>,
    imports: &FxHashMap<String, ImportBinding>,
) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    let name = text(name_node, source).to_string();
    let is_static = has_child_kind(node, "static");
    let readonly = has_child_kind(node, "readonly");
    let privacy = accessibility(node, source);

    let initializer = node.child_by_field_name("value");

    if is_static && EXCLUDED_STATIC_FIELDS.contains(&name.as_str()) {
        if name == "styles" {
            collect_style_bindings(initializer, source, imports, styles);
        }
        return;
    }

    let type_text = node
        .child_by_field_name("type")
        .map(|t| strip_leading_colon(text(t, source)));

    let mut property_options = None;
    let mut cursor = node.walk();
    for dec in node.children(&mut cursor).filter(|c| c.kind() == "decorator") {
        let raw_text = text(dec, source);
        if decorator::decorator_name(raw_text) == "property" {
            property_options = Some(decorator::parse_property_options(raw_text));
        }
    }

    raw.fields.push(RawField {
        name,
        is_static,
        privacy,
        readonly,
        type_text,
        initializer: initializer.map(|n| text(n, source).to_string()),
        property_options,
        writable: true,
        start_byte: node.start_byte() as u32,
    });
}

/// Resolves `static styles = …` into zero or more style bindings: a
/// `css\`…\`` tagged template, a bare identifier imported from a
/// `.css` module, or (recursively) an array mixing both — e.g. `static
/// styles = [sharedStyles, css\`:host { … }\`]` (§4.F style-binding
/// collection).
fn collect_style_bindings(
    initializer: Option<Node>,
    source: &str,
    imports: &FxHashMap<String, ImportBinding>,
    out: &mut Vec<StyleBinding>,
) {
    let Some(node) = initializer else {
        return;
    };
    match node.kind() {
        "tagged_template_expression" => {
            let Some(tag) = node.child(0) else {
                return;
            };
            if text(tag, source) != "css" {
                return;
            }
            let Some(template) = find_child_of_kind(node, "template_string") else {
                return;
            };
            let raw_css = text(template, source).trim_start_matches('`').trim_end_matches('`').to_string();
            out.push(StyleBinding::TaggedTemplate { raw_css });
        }
        "identifier" => {
            let name = text(node, source);
            if let Some(binding) = imports.get(name) {
                if binding.specifier.ends_with(".css") {
                    out.push(StyleBinding::ExternalFile { specifier: binding.specifier.clone() });
                }
            }
        }
        "array" => {
            let mut cursor = node.walk();
            for element in node.named_children(&mut cursor) {
                collect_style_bindings(Some(element), source, imports, out);
            }
        }
        _ => {}
    }
}

struct AccessorAccum {
    name: String,
    is_static: bool,
    privacy: Privacy,
    type_text: Option<String>,
    start_byte: u32,
    has_get: bool,
    has_set: bool,
}

impl AccessorAccum {
    fn into_field(self) -> RawField {
        RawField {
            name: self.name,
            is_static: self.is_static,
            privacy: self.privacy,
            readonly: false,
            type_text: self.type_text,
            initializer: None,
            property_options: None,
            writable: self.has_get && self.has_set,
            start_byte: self.start_byte,
        }
    }
}

fn scan_method(node: Node, source: &str, raw: &mut RawClass, accessors: &mut Vec<AccessorAccum>) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    let name = text(name_node, source).to_string();
    let is_static = has_child_kind(node, "static");
    let privacy = accessibility(node, source);
    let is_getter = has_child_kind(node, "get");
    let is_setter = has_child_kind(node, "set");

    if name == "constructor" {
        scan_constructor_parameter_properties(node, source, raw);
        return;
    }

    if is_getter || is_setter {
        let type_text = if is_getter {
            node.child_by_field_name("return_type").map(|t| strip_leading_colon(text(t, source)))
        } else {
            first_parameter_type(node, source)
        };
        if let Some(existing) = accessors.iter_mut().find(|a| a.name == name) {
            existing.has_get |= is_getter;
            existing.has_set |= is_setter;
            existing.type_text = existing.type_text.clone().or(type_text);
            existing.start_byte = existing.start_byte.min(node.start_byte() as u32);
        } else {
            accessors.push(AccessorAccum {
                name,
                is_static,
                privacy,
                type_text,
                start_byte: node.start_byte() as u32,
                has_get: is_getter,
                has_set: is_setter,
            });
        }
        return;
    }

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| collect_parameters(p, source))
        .unwrap_or_default();
    let return_type = node.child_by_field_name("return_type").map(|t| strip_leading_colon(text(t, source)));

    raw.methods.push(RawMethod {
        name,
        is_static,
        privacy,
        parameters,
        return_type,
        start_byte: node.start_byte() as u32,
    });
}

fn first_parameter_type(method_node: Node, source: &str) -> Option<String> {
    let params = method_node.child_by_field_name("parameters")?;
    let mut cursor = params.walk();
    let first = params.named_children(&mut cursor).next()?;
    first.child_by_field_name("type").map(|t| strip_leading_colon(text(t, source)))
}

fn collect_parameters(params: Node, source: &str) -> Vec<RawParameter> {
    let mut out = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        let optional = param.kind() == "optional_parameter";
        let rest = param.kind() == "rest_pattern";
        let name_node = param.child_by_field_name("pattern").or(Some(param));
        let name = name_node.map(|n| text(n, source).to_string()).unwrap_or_default();
        let type_text = param.child_by_field_name("type").map(|t| strip_leading_colon(text(t, source)));
        out.push(RawParameter { name, type_text, optional, rest });
    }
    out
}

/// TS "parameter properties": a constructor parameter carrying an
/// accessibility or `readonly` modifier becomes a field (§4.F).
fn scan_constructor_parameter_properties(ctor: Node, source: &str, raw: &mut RawClass) {
    let Some(params) = ctor.child_by_field_name("parameters") else {
        return;
    };
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        let has_modifier = find_child_of_kind(param, "accessibility_modifier").is_some() || has_child_kind(param, "readonly");
        if !has_modifier {
            continue;
        }
        let privacy = accessibility(param, source);
        let readonly = has_child_kind(param, "readonly");
        let name_node = param.child_by_field_name("pattern").unwrap_or(param);
        let name = text(name_node, source).to_string();
        let type_text = param.child_by_field_name("type").map(|t| strip_leading_colon(text(t, source)));
        raw.fields.push(RawField {
            name,
            is_static: false,
            privacy,
            readonly,
            type_text,
            initializer: None,
            property_options: None,
            writable: true,
            start_byte: param.start_byte() as u32,
        });
    }
}

fn accessibility(node: Node, source: &str) -> Privacy {
    match find_child_of_kind(node, "accessibility_modifier").map(|n| text(n, source)) {
        Some("private") => Privacy::Private,
        Some("protected") => Privacy::Protected,
        _ => Privacy::Public,
    }
}

fn has_child_kind(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == kind)
}

fn find_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

fn strip_leading_colon(text: &str) -> String {
    text.trim_start_matches(':').trim().to_string()
}

fn text<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
#[path = "tests/class_scan.rs"]
mod tests;
