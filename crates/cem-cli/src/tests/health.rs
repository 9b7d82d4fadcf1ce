use tempfile::tempdir;

use super::*;
use crate::config::CemConfig;

#[test]
fn healthy_workspace_reports_no_diagnostics() {
    let dir = tempdir().unwrap();
    let source = "export class MyButton extends HTMLElement {}\ncustomElements.define('my-button', MyButton);\n";
    std::fs::write(dir.path().join("my-button.ts"), source).unwrap();

    let has_diagnostics = run(dir.path(), &CemConfig::default()).unwrap();
    assert!(!has_diagnostics);
}

#[test]
fn non_utf8_source_file_surfaces_as_a_diagnostic_not_a_fatal_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("broken.ts"), [0xff, 0xfe, 0x00, 0xff]).unwrap();

    let has_diagnostics = run(dir.path(), &CemConfig::default()).unwrap();
    assert!(has_diagnostics);
}
