use cem_common::DiagnosticSink;
use cem_query::QueryManager;
use cem_registry::{Registry, RegistryConfig};
use tempfile::tempdir;

use super::*;
use crate::document::Document;

struct NoopFetcher;

#[async_trait::async_trait]
impl cem_registry::RemoteFetcher for NoopFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, cem_registry::RegistryError> {
        Err(cem_registry::RegistryError::RemoteFetch { url: url.to_string(), attempts: 1, message: "unused".to_string() })
    }
}

fn manager() -> QueryManager {
    let mut entries = cem_extract::queries::entries();
    entries.extend(cem_html::queries::entries());
    QueryManager::new(&entries).expect("queries compile")
}

async fn registry_with_my_button() -> Registry {
    let dir = tempdir().unwrap();
    let json = r#"{"schemaVersion":"2.1.1","modules":[{"path":"my-button.js","kind":"javascript-module","declarations":[{"kind":"class","name":"MyButton","tagName":"my-button","attributes":[{"name":"label"}]}],"exports":[]}]}"#;
    std::fs::write(dir.path().join("custom-elements.json"), json).unwrap();

    let mut registry = Registry::new();
    let fetcher = NoopFetcher;
    let mut sink = DiagnosticSink::new();
    registry.load_manifests(dir.path(), RegistryConfig::default(), &fetcher, &mut sink).await;
    registry
}

#[tokio::test]
async fn unknown_element_is_flagged() {
    let manager = manager();
    let registry = registry_with_my_button().await;
    let doc = Document::new(&manager, "<your-widget></your-widget>".to_string(), 1, "html".to_string());
    let diags = analyze(&manager, &registry, "index.html", &doc);
    assert!(diags.iter().any(|d| d.code == Some(tower_lsp_server::ls_types::NumberOrString::String("unknown-element".to_string()))));
}

#[tokio::test]
async fn known_element_with_known_attribute_has_no_diagnostics() {
    let manager = manager();
    let registry = registry_with_my_button().await;
    let doc = Document::new(&manager, "<my-button label=\"ok\"></my-button>".to_string(), 1, "html".to_string());
    let diags = analyze(&manager, &registry, "index.html", &doc);
    assert!(diags.is_empty());
}

#[tokio::test]
async fn unknown_attribute_suggests_the_nearest_known_one() {
    let manager = manager();
    let registry = registry_with_my_button().await;
    let doc = Document::new(&manager, "<my-button lable=\"ok\"></my-button>".to_string(), 1, "html".to_string());
    let diags = analyze(&manager, &registry, "index.html", &doc);
    assert!(diags.iter().any(|d| d.message.contains("did you mean \"label\"")));
}
