use cem_common::DiagnosticSink;
use cem_query::QueryManager;

use super::extract;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("css queries compile")
}

#[test]
fn host_block_custom_property_is_author_defined() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ":host {\n  /** Brand primary */\n  --color: blue;\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    let prop = result.properties.iter().find(|p| p.name == "--color").expect("--color recorded");
    assert_eq!(prop.default.as_deref(), Some("blue"));
    assert_eq!(prop.description.as_deref(), Some("Brand primary"));
}

#[test]
fn private_host_property_is_excluded() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ":host {\n  --_internal: blue;\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    assert!(result.properties.iter().all(|p| p.name != "--_internal"));
}

#[test]
fn consumed_var_records_fallback_as_default() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ".icon {\n  fill: var(--icon-color, currentColor);\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    let prop = result.properties.iter().find(|p| p.name == "--icon-color").expect("recorded");
    assert_eq!(prop.default.as_deref(), Some("currentColor"));
}

#[test]
fn nested_private_fallback_attaches_to_public_name() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ".icon {\n  fill: var(--_private, var(--icon-color, red));\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    assert!(result.properties.iter().all(|p| p.name != "--_private"));
    let prop = result.properties.iter().find(|p| p.name == "--icon-color").expect("recorded");
    assert_eq!(prop.default.as_deref(), Some("red"));
}

#[test]
fn ambiguous_declaration_emits_diagnostic_and_drops_comment() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ".box {\n  /** a comment */\n  margin: var(--a) var(--b);\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    assert_eq!(sink.as_slice().len(), 1);
    for prop in &result.properties {
        assert_eq!(prop.description, None);
    }
}

#[test]
fn distinct_inline_comments_attach_to_their_own_var_call_individually() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ".box {\n  color: light-dark(/** a */ var(--x), /** b */ var(--y));\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    assert!(sink.as_slice().is_empty());
    let x = result.properties.iter().find(|p| p.name == "--x").expect("--x recorded");
    assert_eq!(x.description.as_deref(), Some("a"));
    let y = result.properties.iter().find(|p| p.name == "--y").expect("--y recorded");
    assert_eq!(y.description.as_deref(), Some("b"));
}

#[test]
fn properties_are_ordered_by_start_byte() {
    let manager = manager();
    let mut sink = DiagnosticSink::new();
    let source = ":host {\n  --b: 1;\n  --a: 2;\n}\n";
    let result = extract(&manager, "el.css", source, &mut sink);

    let names: Vec<&str> = result.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["--b", "--a"]);
}
