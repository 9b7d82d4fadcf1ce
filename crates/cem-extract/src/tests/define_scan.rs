use cem_query::{Grammar, QueryManager};

use super::*;
use crate::imports::ImportBinding;
use crate::queries;

fn manager() -> QueryManager {
    QueryManager::new(&queries::entries()).expect("extract queries compile")
}

#[test]
fn local_class_define_call_is_discovered() {
    let manager = manager();
    let source = "class MyElement extends HTMLElement {}\ncustomElements.define('my-element', MyElement);\n";
    let calls = discover_define_calls(&manager, Grammar::TypeScript, source);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tag_name, "my-element");
    assert_eq!(calls[0].class_name, "MyElement");
}

#[test]
fn resolve_links_to_local_class_with_no_module() {
    let calls = vec![DefineCall { tag_name: "my-element".to_string(), class_name: "MyElement".to_string() }];
    let locals = vec!["MyElement".to_string()];
    let imports = FxHashMap::default();
    let exports = resolve_define_exports(&calls, &locals, &imports);
    match &exports[0] {
        RawExport::CustomElementDefinition { class_module, class_name, .. } => {
            assert_eq!(class_module, &None);
            assert_eq!(class_name, "MyElement");
        }
        _ => panic!("expected custom-element-definition export"),
    }
}

#[test]
fn resolve_links_imported_class_through_its_specifier() {
    let calls = vec![DefineCall { tag_name: "my-element".to_string(), class_name: "Renamed".to_string() }];
    let locals: Vec<String> = Vec::new();
    let mut imports = FxHashMap::default();
    imports.insert(
        "Renamed".to_string(),
        ImportBinding { specifier: "./my-element.js".to_string(), imported_name: Some("MyElement".to_string()) },
    );
    let exports = resolve_define_exports(&calls, &locals, &imports);
    match &exports[0] {
        RawExport::CustomElementDefinition { class_module, class_name, .. } => {
            assert_eq!(class_module.as_deref(), Some("./my-element.js"));
            assert_eq!(class_name, "MyElement");
        }
        _ => panic!("expected custom-element-definition export"),
    }
}
