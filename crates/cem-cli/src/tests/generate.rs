use tempfile::tempdir;

use super::*;
use crate::config::CemConfig;

#[test]
fn build_package_extracts_a_custom_element_from_a_typescript_module() {
    let dir = tempdir().unwrap();
    let source = r#"
/** A clickable button. */
export class MyButton extends HTMLElement {}
customElements.define('my-button', MyButton);
"#;
    std::fs::write(dir.path().join("my-button.ts"), source).unwrap();

    let manager = super::super::query_manager();
    let (package, sink) = build_package(&manager, dir.path(), &CemConfig::default());

    assert!(!sink.has_errors());
    assert_eq!(package.modules.len(), 1);
    assert_eq!(package.modules[0].path, "my-button.ts");
}

#[test]
fn build_package_is_empty_for_a_workspace_with_no_source_files() {
    let dir = tempdir().unwrap();
    let manager = super::super::query_manager();
    let (package, sink) = build_package(&manager, dir.path(), &CemConfig::default());
    assert!(package.modules.is_empty());
    assert!(sink.as_slice().is_empty());
}
