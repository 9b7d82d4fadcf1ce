use tempfile::tempdir;

use super::*;

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("cem".to_string()).chain(args.iter().map(|s| s.to_string())).collect()
}

// `ExitCode` has no `PartialEq`, so tests compare its `Debug` rendering
// against the code a fresh `ExitCode::from(n)` would produce.
fn assert_exit_code(code: ExitCode, expected: u8) {
    assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(expected)));
}

#[tokio::test]
async fn version_exits_success() {
    let code = run(argv(&["version"])).await;
    assert_exit_code(code, EXIT_SUCCESS);
}

#[tokio::test]
async fn an_unknown_subcommand_exits_with_the_usage_code() {
    let code = run(argv(&["not-a-real-subcommand"])).await;
    assert_exit_code(code, EXIT_USAGE);
}

#[tokio::test]
async fn validate_against_a_clean_manifest_exits_success() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom-elements.json");
    let json = r#"{"schemaVersion":"2.1.1","modules":[{"path":"my-button.js","kind":"javascript-module","declarations":[{"kind":"class","name":"MyButton","tagName":"my-button"}],"exports":[]}]}"#;
    std::fs::write(&path, json).unwrap();

    let code = run(argv(&["validate", path.to_str().unwrap()])).await;
    assert_exit_code(code, EXIT_SUCCESS);
}

#[tokio::test]
async fn validate_against_a_manifest_with_duplicate_tags_exits_with_the_diagnostics_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom-elements.json");
    let json = r#"{
        "schemaVersion": "2.1.1",
        "modules": [
            {"path": "a.js", "kind": "javascript-module", "declarations": [{"kind": "class", "name": "A", "tagName": "my-button"}], "exports": []},
            {"path": "b.js", "kind": "javascript-module", "declarations": [{"kind": "class", "name": "B", "tagName": "my-button"}], "exports": []}
        ]
    }"#;
    std::fs::write(&path, json).unwrap();

    let code = run(argv(&["validate", path.to_str().unwrap()])).await;
    assert_exit_code(code, EXIT_DIAGNOSTICS_FOUND);
}

#[tokio::test]
async fn validate_against_a_malformed_manifest_exits_with_the_fatal_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom-elements.json");
    std::fs::write(&path, "not json").unwrap();

    let code = run(argv(&["validate", path.to_str().unwrap()])).await;
    assert_exit_code(code, EXIT_FATAL);
}

#[tokio::test]
async fn generate_over_an_empty_workspace_exits_success() {
    let dir = tempdir().unwrap();
    let code = run(argv(&["--workspace", dir.path().to_str().unwrap(), "generate"])).await;
    assert_exit_code(code, EXIT_SUCCESS);
}
