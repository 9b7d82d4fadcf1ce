use std::fs;

use cem_common::DiagnosticSink;
use tempfile::tempdir;

use super::*;
use crate::remote::RemoteFetcher;

struct MapRemoteFetcher {
    files: rustc_hash::FxHashMap<String, String>,
}

#[async_trait::async_trait]
impl RemoteFetcher for MapRemoteFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, RegistryError> {
        self.files.get(url).cloned().ok_or_else(|| RegistryError::RemoteFetch {
            url: url.to_string(),
            attempts: 1,
            message: "not found".to_string(),
        })
    }
}

fn write_manifest(path: &Path, tag: &str) {
    let json = format!(
        r#"{{"schemaVersion":"2.1.1","modules":[{{"path":"{tag}.js","kind":"javascript-module","declarations":[{{"kind":"class","name":"C","tagName":"{tag}"}}],"exports":[]}}]}}"#
    );
    fs::write(path, json).unwrap();
}

#[tokio::test]
async fn local_manifest_is_loaded_and_queryable() {
    let dir = tempdir().unwrap();
    write_manifest(&dir.path().join("custom-elements.json"), "my-button");

    let mut registry = Registry::new();
    let fetcher = MapRemoteFetcher { files: rustc_hash::FxHashMap::default() };
    let mut sink = DiagnosticSink::new();
    registry.load_manifests(dir.path(), RegistryConfig::default(), &fetcher, &mut sink).await;

    assert!(registry.element_info("my-button").is_some());
    assert_eq!(registry.all_tag_names(), vec!["my-button"]);
}

#[tokio::test]
async fn local_manifest_wins_over_additional_package() {
    let dir = tempdir().unwrap();
    write_manifest(&dir.path().join("custom-elements.json"), "my-button");

    let mut files = rustc_hash::FxHashMap::default();
    files.insert(
        "https://example.com/pkg/package.json".to_string(),
        r#"{"customElements": "custom-elements.json"}"#.to_string(),
    );
    let remote_manifest = format!(
        r#"{{"schemaVersion":"2.1.1","modules":[{{"path":"remote.js","kind":"javascript-module","declarations":[{{"kind":"class","name":"C","tagName":"my-button"}}],"exports":[]}}]}}"#
    );
    files.insert("https://example.com/pkg/custom-elements.json".to_string(), remote_manifest);
    let fetcher = MapRemoteFetcher { files };

    let mut registry = Registry::new();
    let config = RegistryConfig { manifests: Vec::new(), additional_packages: vec!["https://example.com/pkg".to_string()] };
    let mut sink = DiagnosticSink::new();
    registry.load_manifests(dir.path(), config, &fetcher, &mut sink).await;

    let (info, _) = registry.element_info("my-button").unwrap();
    assert_eq!(info.module_path, "my-button.js");
}

#[tokio::test]
async fn invalidate_removes_and_rehydrates_a_changed_manifest() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("custom-elements.json");
    write_manifest(&manifest_path, "my-button");

    let mut registry = Registry::new();
    let fetcher = MapRemoteFetcher { files: rustc_hash::FxHashMap::default() };
    let mut sink = DiagnosticSink::new();
    registry.load_manifests(dir.path(), RegistryConfig::default(), &fetcher, &mut sink).await;
    assert!(registry.element_info("my-button").is_some());

    write_manifest(&manifest_path, "my-other-button");
    registry.invalidate(&[manifest_path], &fetcher, &mut sink).await;

    assert!(registry.element_info("my-button").is_none());
    assert!(registry.element_info("my-other-button").is_some());
}
