use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn finds_a_bare_custom_elements_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("custom-elements.json"), "{}").unwrap();
    let found = discover_local_manifests(dir.path());
    assert_eq!(found, vec![dir.path().join("custom-elements.json")]);
}

#[test]
fn follows_package_json_custom_elements_field() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"customElements": "dist/custom-elements.json"}"#).unwrap();
    let found = discover_local_manifests(dir.path());
    assert_eq!(found, vec![dir.path().join("dist/custom-elements.json")]);
}

#[test]
fn ignores_package_json_without_the_field() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name": "x"}"#).unwrap();
    let found = discover_local_manifests(dir.path());
    assert!(found.is_empty());
}

#[test]
fn skips_node_modules() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("node_modules/dep");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("custom-elements.json"), "{}").unwrap();
    let found = discover_local_manifests(dir.path());
    assert!(found.is_empty());
}
